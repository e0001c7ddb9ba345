pub mod fixtures;
pub mod model;
pub mod rest;
pub mod service;
