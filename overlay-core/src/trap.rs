//! Cyclic Tab containment.

/// Outcome of a Tab press inside an open overlay.
#[derive(Debug, PartialEq, Eq)]
pub enum TrapStep<'a, E> {
    /// Nothing focusable: keep focus on the container.
    Contain,
    /// Move focus explicitly and suppress the default action.
    MoveTo(&'a E),
    /// The browser's own sequential navigation stays inside the overlay.
    PassThrough,
}

/// Decide where Tab (or Shift+Tab when `backwards`) goes.
///
/// `active_inside` tells whether the focused element is the container or one
/// of its descendants.
pub fn tab_step<'a, E: PartialEq>(
    focusables: &'a [E],
    active: Option<&E>,
    active_inside: bool,
    backwards: bool,
) -> TrapStep<'a, E> {
    let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
        return TrapStep::Contain;
    };
    let edge = if backwards { last } else { first };
    let Some(active) = active.filter(|_| active_inside) else {
        return TrapStep::MoveTo(edge);
    };
    if !focusables.contains(active) {
        // Container itself, or a non-tabbable descendant.
        return TrapStep::MoveTo(edge);
    }
    if backwards && active == first {
        TrapStep::MoveTo(last)
    } else if !backwards && active == last {
        TrapStep::MoveTo(first)
    } else {
        TrapStep::PassThrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [&str; 3] = ["close", "prev", "next"];

    #[test]
    fn forward_from_last_wraps_to_first() {
        assert_eq!(
            tab_step(&ITEMS, Some(&"next"), true, false),
            TrapStep::MoveTo(&"close")
        );
    }

    #[test]
    fn backward_from_first_wraps_to_last() {
        assert_eq!(
            tab_step(&ITEMS, Some(&"close"), true, true),
            TrapStep::MoveTo(&"next")
        );
    }

    #[test]
    fn middle_elements_pass_through() {
        assert_eq!(
            tab_step(&ITEMS, Some(&"prev"), true, false),
            TrapStep::PassThrough
        );
        assert_eq!(
            tab_step(&ITEMS, Some(&"prev"), true, true),
            TrapStep::PassThrough
        );
    }

    #[test]
    fn focus_outside_is_pulled_back() {
        assert_eq!(
            tab_step(&ITEMS, Some(&"page-link"), false, false),
            TrapStep::MoveTo(&"close")
        );
        assert_eq!(
            tab_step(&ITEMS, None, false, true),
            TrapStep::MoveTo(&"next")
        );
    }

    #[test]
    fn container_focus_enters_at_edges() {
        assert_eq!(
            tab_step(&ITEMS, Some(&"dialog"), true, true),
            TrapStep::MoveTo(&"next")
        );
        assert_eq!(
            tab_step(&ITEMS, Some(&"dialog"), true, false),
            TrapStep::MoveTo(&"close")
        );
    }

    #[test]
    fn empty_set_contains() {
        let none: [&str; 0] = [];
        assert_eq!(tab_step(&none, Some(&"dialog"), true, false), TrapStep::Contain);
    }

    #[test]
    fn single_element_cycles_onto_itself() {
        let one = ["only"];
        assert_eq!(
            tab_step(&one, Some(&"only"), true, false),
            TrapStep::MoveTo(&"only")
        );
        assert_eq!(
            tab_step(&one, Some(&"only"), true, true),
            TrapStep::MoveTo(&"only")
        );
    }
}
