mod report;

pub use report::{ChatApiReply, OutboundMessage, ReportWindow, TransactionAggregateRow};
