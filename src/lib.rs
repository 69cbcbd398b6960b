pub mod catalog;
pub mod config;
pub mod generator;
pub mod logger;
pub mod models;
pub mod pricing;
pub mod services;
pub mod web;
