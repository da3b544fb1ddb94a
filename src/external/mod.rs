pub mod nominatim;
pub mod opener;
