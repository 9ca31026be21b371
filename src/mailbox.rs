//! Single-slot holder for the latest result of a background request.
//!
//! Each request takes a [`Ticket`] from [`Mailbox::begin`]. Only the most
//! recently issued ticket can deliver, so a slow response to an older request
//! never overwrites the result of a newer one.

/// Identifies one request made against a [`Mailbox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn number(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct Mailbox<T> {
    value: Option<T>,
    issued: u64,
    pending: bool,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self {
            value: None,
            issued: 0,
            pending: false,
        }
    }
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request. Clears the slot and supersedes older tickets.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.value = None;
        self.pending = true;
        Ticket(self.issued)
    }

    /// Stores `value` if `ticket` is the latest one issued.
    ///
    /// Returns false, dropping the value, for a superseded ticket.
    pub fn deliver(&mut self, ticket: Ticket, value: T) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.value = Some(value);
        self.pending = false;
        true
    }

    /// Whether `ticket` would be accepted by [`Mailbox::deliver`].
    pub fn accepts(&self, ticket: Ticket) -> bool {
        self.pending && ticket.0 == self.issued
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Replaces the value directly and cancels any pending request.
    pub fn set(&mut self, value: T) {
        self.issued += 1;
        self.pending = false;
        self.value = Some(value);
    }

    /// Empties the slot and cancels any pending request.
    pub fn clear(&mut self) {
        self.issued += 1;
        self.pending = false;
        self.value = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut mailbox = Mailbox::new();
        let first = mailbox.begin();
        let second = mailbox.begin();

        assert!(mailbox.deliver(second, "new"));
        assert!(!mailbox.deliver(first, "old"));
        assert_eq!(mailbox.get(), Some(&"new"));
    }

    #[test]
    fn test_stale_delivery_before_latest_is_dropped() {
        let mut mailbox = Mailbox::new();
        let first = mailbox.begin();
        let second = mailbox.begin();

        assert!(!mailbox.deliver(first, 1));
        assert_eq!(mailbox.get(), None);
        assert!(mailbox.is_pending());
        assert!(mailbox.deliver(second, 2));
        assert!(!mailbox.is_pending());
    }

    #[test]
    fn test_begin_clears_previous_value() {
        let mut mailbox = Mailbox::new();
        mailbox.set("shown");
        let _ticket = mailbox.begin();
        assert_eq!(mailbox.get(), None);
    }

    #[test]
    fn test_delivery_is_accepted_once() {
        let mut mailbox = Mailbox::new();
        let ticket = mailbox.begin();
        assert!(mailbox.deliver(ticket, 1));
        assert!(!mailbox.deliver(ticket, 2));
        assert_eq!(mailbox.get(), Some(&1));
    }

    #[test]
    fn test_clear_cancels_pending_request() {
        let mut mailbox = Mailbox::new();
        let ticket = mailbox.begin();
        mailbox.clear();
        assert!(!mailbox.deliver(ticket, 1));
        assert_eq!(mailbox.get(), None);
    }
}
