
mod properties;
