pub mod http_customization_service;
