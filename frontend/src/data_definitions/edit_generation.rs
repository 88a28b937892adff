//! Tracks which keystroke is the latest, so a delayed commit can tell whether
//! newer input has arrived since it was scheduled.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditGeneration(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTicket(u64);

impl EditGeneration {
    /// Records a new edit and returns the ticket a delayed commit should hold.
    pub fn bump(&mut self) -> EditTicket {
        self.0 = self.0.wrapping_add(1);
        EditTicket(self.0)
    }

    pub fn is_latest(&self, ticket: EditTicket) -> bool {
        self.0 == ticket.0
    }
}
