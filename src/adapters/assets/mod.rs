pub mod menu_assets;
