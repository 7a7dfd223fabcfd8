pub mod batch;
pub mod queue;
pub mod template;
pub mod worker;

pub use batch::submit;
pub use queue::{TaskQueue, TaskReceiver, task_queue};
pub use template::{TemplateError, render};
pub use worker::DispatchWorker;
