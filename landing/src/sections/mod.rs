// Landing page sections
// Developed by the IKUL cars team (c)2025

mod footer;
mod hero;
mod preloader;
mod search;
mod showcase;
mod value_proposition;

pub use footer::Footer;
pub use hero::HeroSection;
pub use preloader::Preloader;
pub use search::ArchiveSearch;
pub use showcase::LatestSpecsShowcase;
pub use value_proposition::ValueProposition;
