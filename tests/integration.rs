//! Integration test suite for the dvrbar CLI

mod integration {
    mod helpers;

    mod config_test;
    mod status_test;
}
