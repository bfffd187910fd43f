//! Reusable UI components

pub mod hospital_results;
pub mod nav_bar;
pub mod search_bar;
pub mod search_button;
pub mod search_dropdown;

pub use hospital_results::HospitalResults;
pub use nav_bar::NavBar;
pub use search_bar::SearchBar;
pub use search_button::SearchButton;
pub use search_dropdown::SearchDropdown;
