mod queue;

pub use queue::ApprovalQueuePage;
