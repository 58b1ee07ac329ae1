
// --- Unit Tests ---
pub mod unit {
    pub mod enumeration_test;
    pub mod errors_test;
    pub mod init_test;
    pub mod metadata_test;
    pub mod mint_test;
    pub mod ownership_test;
    pub mod reserve_test;
    pub mod sale_config_test;
    pub mod transfer_test;
    pub mod withdraw_test;
}
