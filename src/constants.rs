pub const API_NAME: &str = "[car-inventory-api]";
