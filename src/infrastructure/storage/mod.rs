mod sign_off_log_file;

pub use sign_off_log_file::FileSignOffLog;
