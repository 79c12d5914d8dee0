pub mod ensure_status;
