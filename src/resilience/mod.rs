//! 弹性模块：远程任务轮询策略（固定间隔、有限次数、错误分类）。
//!
//! # Resilience Module
//!
//! The remote service is asynchronous: a submission returns a job id and the
//! result must be fetched later. [`PollPolicy`] owns the rules for that wait:
//!
//! - fixed number of attempts (default 15)
//! - fixed delay between attempts (default 3 s)
//! - which attempt errors are swallowed and which abort the loop
//!
//! ```rust
//! use humanize_client::resilience::{PollOutcome, PollPolicy};
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let policy = PollPolicy::new(3, Duration::ZERO);
//! let outcome = policy
//!     .run(|attempt| async move {
//!         Ok::<_, humanize_client::Error>((attempt == 2).then(|| "done"))
//!     })
//!     .await
//!     .unwrap();
//! assert_eq!(outcome, PollOutcome::Ready { value: "done", attempts: 2 });
//! # });
//! ```

pub mod poll;

pub use poll::{AttemptClass, PollOutcome, PollPolicy};
