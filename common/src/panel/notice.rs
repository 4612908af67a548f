/// User-facing outcome texts for panel actions. One generic message per
/// action; the cause is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    Delete,
    Purchase,
    Pay,
    Refund,
    Reserve,
    CancelReservation,
}

impl Action {
    pub fn success(self, noun: &str) -> String {
        match self {
            Action::Add => format!("{} added successfully!", capitalize(noun)),
            Action::Update => format!("{} updated successfully!", capitalize(noun)),
            Action::Delete => format!("{} deleted successfully!", capitalize(noun)),
            Action::Purchase => "Ticket purchased successfully!".to_string(),
            Action::Pay => "Payment received successfully!".to_string(),
            Action::Refund => "Ticket refunded successfully!".to_string(),
            Action::Reserve => "Reservation created successfully!".to_string(),
            Action::CancelReservation => "Reservation cancelled successfully!".to_string(),
        }
    }

    pub fn failure(self, noun: &str) -> String {
        match self {
            Action::Add => format!("Error while adding {noun}!"),
            Action::Update => format!("Error while updating {noun}!"),
            Action::Delete => format!("Error while deleting {noun}!"),
            Action::Purchase => "Error while purchasing the ticket!".to_string(),
            Action::Pay => "Error while processing the payment!".to_string(),
            Action::Refund => "Error while refunding the ticket!".to_string(),
            Action::Reserve => "Error while creating the reservation!".to_string(),
            Action::CancelReservation => "Error while cancelling the reservation!".to_string(),
        }
    }

    /// Question shown before destructive actions, `None` for the others.
    pub fn confirmation(self, noun: &str) -> Option<String> {
        match self {
            Action::Delete => Some(format!("Are you sure you want to delete this {noun}?")),
            Action::Refund => Some("Are you sure you want to refund this ticket?".to_string()),
            Action::CancelReservation => {
                Some("Are you sure you want to cancel this reservation?".to_string())
            }
            _ => None,
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
