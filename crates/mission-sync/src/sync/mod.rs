//! Mission Synchronization Layer
//!
//! Keeps a local mirror of the remote mission collection for the dashboard.

mod mission_sync;
mod notice;


pub use mission_sync::{MissionSync, MissionView};
pub use notice::{LogNotifier, Notice, NoticeLevel, Notifier};
