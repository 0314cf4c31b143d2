mod config;
mod scan;
