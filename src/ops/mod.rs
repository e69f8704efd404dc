pub mod task_ops;
