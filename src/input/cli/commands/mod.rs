pub mod run_export;
