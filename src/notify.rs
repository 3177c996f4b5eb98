/// Toast notification channel: one live message, replaced by every `show`

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

/// Time a toast stays on screen
pub const DISMISS_AFTER_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
}

/// Handle to a pending scheduled callback
pub trait ScheduledTask {
    fn cancel(&self);
}

/// Source of delayed callbacks
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask>;
}

/// Browser timers via `gloo-timers`
pub struct BrowserScheduler;

struct TimeoutTask(RefCell<Option<Timeout>>);

impl ScheduledTask for TimeoutTask {
    fn cancel(&self) {
        // clears the browser timer; a closure dropped mid-call is freed by wasm-bindgen once it returns
        let timeout = self.0.borrow_mut().take();
        if let Some(timeout) = timeout {
            timeout.cancel();
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask> {
        Box::new(TimeoutTask(RefCell::new(Some(Timeout::new(delay_ms, task)))))
    }
}

type Listener = Rc<dyn Fn(&Notification)>;

struct Channel {
    current: Notification,
    pending: Option<Box<dyn ScheduledTask>>,
    // bumped by every show; a timer only dismisses the message it was armed for
    generation: u64,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

/// Shared handle to the channel. A superseded timer is cancelled and can never
/// hide a newer message.
#[derive(Clone)]
pub struct Notifier {
    channel: Rc<RefCell<Channel>>,
    scheduler: Rc<dyn Scheduler>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.channel, &other.channel)
    }
}

impl Notifier {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Notifier {
            channel: Rc::new(RefCell::new(Channel {
                current: Notification::default(),
                pending: None,
                generation: 0,
                listeners: Vec::new(),
                next_listener: 0,
            })),
            scheduler,
        }
    }

    pub fn browser() -> Self {
        Notifier::new(Rc::new(BrowserScheduler))
    }

    pub fn current(&self) -> Notification {
        self.channel.borrow().current.clone()
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let (previous, generation) = {
            let mut channel = self.channel.borrow_mut();
            channel.generation += 1;
            channel.current = Notification {
                message: message.into(),
                severity,
                visible: true,
            };
            (channel.pending.take(), channel.generation)
        };

        if let Some(task) = previous {
            task.cancel();
        }

        let weak = Rc::downgrade(&self.channel);
        let task = self.scheduler.schedule(
            DISMISS_AFTER_MS,
            Box::new(move || {
                if let Some(channel) = weak.upgrade() {
                    dismiss(&channel, Some(generation));
                }
            }),
        );
        self.channel.borrow_mut().pending = Some(task);

        publish(&self.channel);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, Severity::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }

    /// Hide now. Does nothing when no toast is visible.
    pub fn hide(&self) {
        dismiss(&self.channel, None);
    }

    /// Register a listener called on every visible change. Dropping the
    /// returned `Subscription` unregisters it.
    pub fn subscribe(&self, listener: impl Fn(&Notification) + 'static) -> Subscription {
        let mut channel = self.channel.borrow_mut();
        let id = channel.next_listener;
        channel.next_listener += 1;
        channel.listeners.push((id, Rc::new(listener)));

        Subscription {
            channel: Rc::downgrade(&self.channel),
            id,
        }
    }

    /// Application teardown: cancel the pending timer and drop all listeners
    pub fn shutdown(&self) {
        let pending = {
            let mut channel = self.channel.borrow_mut();
            channel.current.visible = false;
            channel.listeners.clear();
            channel.pending.take()
        };

        if let Some(task) = pending {
            task.cancel();
        }
    }
}

fn dismiss(channel: &Rc<RefCell<Channel>>, generation: Option<u64>) {
    let pending = {
        let mut state = channel.borrow_mut();
        if generation.is_some_and(|g| g != state.generation) || !state.current.visible {
            return;
        }
        state.current.visible = false;
        state.pending.take()
    };

    if let Some(task) = pending {
        task.cancel();
    }

    publish(channel);
}

fn publish(channel: &Rc<RefCell<Channel>>) {
    // Listeners may call back into the channel; never hold the borrow while notifying
    let (snapshot, listeners): (Notification, Vec<Listener>) = {
        let state = channel.borrow();
        (
            state.current.clone(),
            state.listeners.iter().map(|(_, l)| l.clone()).collect(),
        )
    };

    for listener in listeners {
        listener(&snapshot);
    }
}

pub struct Subscription {
    channel: Weak<RefCell<Channel>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(channel) = self.channel.upgrade() {
            channel.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{manual_notifier, record};
    use super::*;

    #[test]
    fn test_show_publishes_visible_notification() {
        let (notifier, _scheduler) = manual_notifier();
        let (seen, _sub) = record(&notifier);

        notifier.show("Jogo adicionado à wishlist!", Severity::Success);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].message, "Jogo adicionado à wishlist!");
        assert_eq!(seen[0].severity, Severity::Success);
        assert!(seen[0].visible);
        assert!(notifier.current().visible);
    }

    #[test]
    fn test_auto_dismiss_after_timeout() {
        let (notifier, scheduler) = manual_notifier();

        notifier.info("hello");
        scheduler.advance(u64::from(DISMISS_AFTER_MS) - 1);
        assert!(notifier.current().visible);

        scheduler.advance(1);
        assert!(!notifier.current().visible);
        assert_eq!(notifier.current().message, "hello");
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_second_show_supersedes_first_timer() {
        let (notifier, scheduler) = manual_notifier();

        notifier.info("first");
        scheduler.advance(2000);
        notifier.error("second");
        assert_eq!(scheduler.pending(), 1);

        // the first message's deadline passes without hiding the second
        scheduler.advance(1000);
        let current = notifier.current();
        assert!(current.visible);
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(scheduler.fired(), 0);

        scheduler.advance(2000);
        assert!(!notifier.current().visible);
        assert_eq!(scheduler.fired(), 1);
    }

    #[test]
    fn test_hide_cancels_timer() {
        let (notifier, scheduler) = manual_notifier();
        let (seen, _sub) = record(&notifier);

        notifier.info("bye");
        notifier.hide();

        assert!(!notifier.current().visible);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(10_000);
        assert_eq!(scheduler.fired(), 0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_hide_when_hidden_is_noop() {
        let (notifier, _scheduler) = manual_notifier();
        let (seen, _sub) = record(&notifier);

        notifier.hide();
        notifier.hide();

        assert!(seen.borrow().is_empty());
        assert_eq!(notifier.current(), Notification::default());
    }

    #[test]
    fn test_dropped_subscription_stops_updates() {
        let (notifier, _scheduler) = manual_notifier();
        let (seen, sub) = record(&notifier);

        notifier.info("one");
        drop(sub);
        notifier.info("two");

        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_listener_may_reenter_channel() {
        let (notifier, _scheduler) = manual_notifier();
        let inner = notifier.clone();
        let _sub = notifier.subscribe(move |n| {
            if n.visible && n.severity == Severity::Error {
                inner.hide();
            }
        });

        notifier.error("boom");

        assert!(!notifier.current().visible);
    }

    #[test]
    fn test_shutdown_cancels_pending_timer() {
        let (notifier, scheduler) = manual_notifier();
        let (seen, _sub) = record(&notifier);

        notifier.success("saved");
        notifier.shutdown();

        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(u64::from(DISMISS_AFTER_MS));
        assert_eq!(scheduler.fired(), 0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_clones_share_channel() {
        let (notifier, _scheduler) = manual_notifier();
        let other = notifier.clone();

        other.info("shared");

        assert_eq!(notifier.current().message, "shared");
        assert!(notifier == other);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_browser_toast_dismisses_after_timeout() {
        let notifier = Notifier::browser();

        notifier.info("hello");
        TimeoutFuture::new(DISMISS_AFTER_MS - 500).await;
        assert!(notifier.current().visible);

        TimeoutFuture::new(1000).await;
        assert!(!notifier.current().visible);
    }

    #[wasm_bindgen_test]
    async fn test_browser_second_show_not_hidden_early() {
        let notifier = Notifier::browser();

        notifier.info("first");
        TimeoutFuture::new(1000).await;
        notifier.error("second");

        // past the first message's deadline
        TimeoutFuture::new(DISMISS_AFTER_MS - 500).await;
        let current = notifier.current();
        assert!(current.visible);
        assert_eq!(current.message, "second");

        TimeoutFuture::new(1000).await;
        assert!(!notifier.current().visible);
    }

    #[wasm_bindgen_test]
    async fn test_browser_cancelled_task_never_runs() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();

        let task = BrowserScheduler.schedule(50, Box::new(move || flag.set(true)));
        task.cancel();
        task.cancel();

        TimeoutFuture::new(200).await;
        assert!(!ran.get());
    }

    #[wasm_bindgen_test]
    async fn test_browser_scheduled_task_runs() {
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();

        let _task = BrowserScheduler.schedule(50, Box::new(move || flag.set(true)));

        TimeoutFuture::new(200).await;
        assert!(ran.get());
    }
}
