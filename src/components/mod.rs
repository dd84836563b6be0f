pub mod details_panel;
pub mod projects;
pub mod sky_network;
pub mod site;
