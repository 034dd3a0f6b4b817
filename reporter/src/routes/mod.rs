mod report;

pub use report::send_report;
