//! One user's navigation state over a paginated list.

use std::time::{Duration, Instant};

use crate::serenity::UserId;
use crate::SloorError;

use super::page::{page_window, total_pages};

/// Which way a navigation button points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The page changed; the view must be re-rendered.
    Turned,
    /// Accepted, but already at the boundary. Nothing to re-render.
    Unmoved,
    /// The actor does not own this session. State is untouched.
    Denied,
    /// The inactivity deadline has passed. Terminal.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Active,
    Expired,
}

/// Paging state for one invocation of a listing command.
///
/// Owns nothing but indices: the item list itself stays with [Data] and
/// is only ever read. Navigation is restricted to the user who opened
/// the session, and every accepted navigation pushes the inactivity
/// deadline out by the idle timeout. Once expired, a session never
/// accepts navigation again.
///
/// [Data]: crate::data::Data
#[derive(Debug)]
pub struct PageSession {
    /// The user who opened the session.
    owner: UserId,
    /// Length of the underlying list.
    item_count: usize,
    /// Items per page, at least 1.
    per_page: usize,
    /// Current page, always in `0..total_pages`.
    page: usize,
    /// Cached page count, always at least 1.
    total_pages: usize,
    /// Idle window granted by each accepted navigation.
    idle_timeout: Duration,
    /// When the session expires unless navigation arrives first.
    deadline: Instant,
    state: State,
}

impl PageSession {
    /// Open a session on page 0.
    ///
    /// Fails if `per_page` is zero. That is a configuration mistake and
    /// is surfaced immediately rather than clamped.
    pub fn open(
        item_count: usize,
        per_page: usize,
        owner: UserId,
        idle_timeout: Duration,
        now: Instant,
    ) -> Result<Self, SloorError> {
        if per_page == 0 {
            return Err(SloorError::InvalidPageSize);
        }

        Ok(Self {
            owner,
            item_count,
            per_page,
            page: 0,
            total_pages: total_pages(item_count, per_page),
            idle_timeout,
            deadline: now + idle_timeout,
            state: State::Active,
        })
    }

    /// Apply one navigation event.
    ///
    /// Ownership is checked before anything else mutates; a denied
    /// attempt neither turns the page nor extends the deadline. Moving
    /// past either end of the list is a no-op, not an error.
    pub fn navigate(&mut self, actor: UserId, direction: Direction, now: Instant) -> Navigation {
        if self.state == State::Expired || now >= self.deadline {
            self.state = State::Expired;
            return Navigation::Expired;
        }

        if actor != self.owner {
            return Navigation::Denied;
        }

        self.deadline = now + self.idle_timeout;

        let target = match direction {
            Direction::Previous => self.page.saturating_sub(1),
            Direction::Next => (self.page + 1).min(self.total_pages - 1),
        };

        if target == self.page {
            Navigation::Unmoved
        } else {
            self.page = target;
            Navigation::Turned
        }
    }

    /// Transition to the terminal state. Idempotent.
    pub fn expire(&mut self) {
        self.state = State::Expired;
    }

    /// Time left until the session expires. Zero once it has.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.state {
            State::Active => self.deadline.saturating_duration_since(now),
            State::Expired => Duration::ZERO,
        }
    }

    /// Item window of the current page, for slicing the backing list.
    pub fn window(&self) -> (usize, usize) {
        page_window(self.item_count, self.per_page, self.page)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Whether the "previous" control should be live.
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Whether the "next" control should be live.
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// One-based footer text, e.g. `Page 2 of 3`.
    pub fn footer(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const IDLE: Duration = Duration::from_secs(60);

    fn owner() -> UserId {
        UserId::new(100)
    }

    fn stranger() -> UserId {
        UserId::new(200)
    }

    fn session(item_count: usize, per_page: usize, now: Instant) -> PageSession {
        PageSession::open(item_count, per_page, owner(), IDLE, now).unwrap()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = PageSession::open(10, 0, owner(), IDLE, Instant::now());
        assert!(matches!(result, Err(SloorError::InvalidPageSize)));
    }

    #[test]
    fn twenty_five_items_split_into_two_pages() {
        let now = Instant::now();
        let mut s = session(25, 20, now);

        assert_eq!(s.total_pages(), 2);
        assert_eq!(s.window(), (0, 20));
        assert!(!s.has_previous());
        assert!(s.has_next());
        assert_eq!(s.footer(), "Page 1 of 2");

        assert_eq!(s.navigate(owner(), Direction::Next, now), Navigation::Turned);
        assert_eq!(s.window(), (20, 25));
        assert!(s.has_previous());
        assert!(!s.has_next());
        assert_eq!(s.footer(), "Page 2 of 2");
    }

    #[test]
    fn next_on_last_page_is_a_noop() {
        let now = Instant::now();
        let mut s = session(25, 20, now);

        assert_eq!(s.navigate(owner(), Direction::Next, now), Navigation::Turned);
        assert_eq!(s.navigate(owner(), Direction::Next, now), Navigation::Unmoved);
        assert_eq!(s.page(), 1);
    }

    #[test]
    fn previous_on_first_page_is_a_noop() {
        let now = Instant::now();
        let mut s = session(25, 20, now);

        assert_eq!(
            s.navigate(owner(), Direction::Previous, now),
            Navigation::Unmoved
        );
        assert_eq!(s.page(), 0);
    }

    #[test]
    fn page_never_leaves_bounds() {
        let now = Instant::now();
        let mut s = session(45, 10, now);

        for _ in 0..20 {
            s.navigate(owner(), Direction::Next, now);
            assert!(s.page() < s.total_pages());
        }
        for _ in 0..20 {
            s.navigate(owner(), Direction::Previous, now);
            assert!(s.page() < s.total_pages());
        }
        assert_eq!(s.page(), 0);
    }

    #[test]
    fn strangers_cannot_turn_pages() {
        let now = Instant::now();
        let mut s = session(25, 20, now);

        let later = now + Duration::from_secs(30);
        assert_eq!(
            s.navigate(stranger(), Direction::Next, later),
            Navigation::Denied
        );
        assert_eq!(s.page(), 0);
        // A denied attempt must not extend the deadline either.
        assert_eq!(s.remaining(later), IDLE - Duration::from_secs(30));
    }

    #[test]
    fn accepted_navigation_resets_the_deadline() {
        let now = Instant::now();
        let mut s = session(25, 20, now);

        let later = now + Duration::from_secs(30);
        s.navigate(owner(), Direction::Next, later);
        assert_eq!(s.remaining(later), IDLE);
    }

    #[test]
    fn empty_list_has_a_single_locked_page() {
        let now = Instant::now();
        let mut s = session(0, 20, now);

        assert_eq!(s.total_pages(), 1);
        assert_eq!(s.window(), (0, 0));
        assert!(!s.has_previous());
        assert!(!s.has_next());
        assert_eq!(s.navigate(owner(), Direction::Next, now), Navigation::Unmoved);
    }

    #[test]
    fn idle_session_expires() {
        let now = Instant::now();
        let mut s = session(25, 20, now);

        let past_deadline = now + IDLE + Duration::from_secs(1);
        assert_eq!(
            s.navigate(owner(), Direction::Next, past_deadline),
            Navigation::Expired
        );
        assert_eq!(s.page(), 0);
    }

    #[test]
    fn expiry_is_terminal() {
        let now = Instant::now();
        let mut s = session(25, 20, now);

        s.expire();
        assert_eq!(s.remaining(now), Duration::ZERO);
        // Even an in-window navigation from the owner stays rejected.
        assert_eq!(
            s.navigate(owner(), Direction::Next, now),
            Navigation::Expired
        );
    }
}
