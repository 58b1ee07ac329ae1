pub mod types;

mod enumeration;
mod metadata;
mod mint;
mod ownership;
mod transfer;
