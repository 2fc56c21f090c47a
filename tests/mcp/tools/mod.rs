mod config;
mod locate;
mod scan;
mod translations;
