/// Navigation capability handed to the update component.
///
/// The component only ever asks to go back to wherever the user came from;
/// what "back" means is up to the shell (a redirect, a history pop, ...).
pub trait Navigator: Send + Sync {
    fn previous_state(&self);
}
