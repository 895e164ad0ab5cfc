//! Non-blocking prompts.
//!
//! A dialog holds the [`Reply`] half while the task that asked the question
//! awaits the [`Pending`] half. Dropping the reply without answering counts
//! as cancel, so closing a window can never leave a task waiting forever.

use tokio::sync::oneshot;

/// Answering side, owned by the dialog
#[derive(Debug)]
pub struct Reply<T> {
    tx: oneshot::Sender<T>,
}

/// Asking side, awaited by the controller
#[derive(Debug)]
pub struct Pending<T> {
    rx: oneshot::Receiver<T>,
}

pub fn prompt<T>() -> (Reply<T>, Pending<T>) {
    let (tx, rx) = oneshot::channel();
    (Reply { tx }, Pending { rx })
}

impl<T> Reply<T> {
    /// Submit an answer. Returns false if nobody is waiting anymore.
    pub fn send(self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }

    pub fn cancel(self) {}
}

impl<T> Pending<T> {
    /// `None` when the dialog was cancelled or closed
    pub async fn answered(self) -> Option<T> {
        self.rx.await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answer_reaches_waiter() {
        let (reply, pending) = prompt();
        assert!(reply.send(42));
        assert_eq!(pending.answered().await, Some(42));
    }

    #[tokio::test]
    async fn cancel_resolves_as_none() {
        let (reply, pending) = prompt::<String>();
        reply.cancel();
        assert_eq!(pending.answered().await, None);
    }

    #[tokio::test]
    async fn dropped_reply_resolves_as_none() {
        let (reply, pending) = prompt::<()>();
        drop(reply);
        assert_eq!(pending.answered().await, None);
    }

    #[test]
    fn send_after_waiter_gone() {
        let (reply, pending) = prompt::<u8>();
        drop(pending);
        assert!(!reply.send(1));
    }
}
