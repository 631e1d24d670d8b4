use crate::faq::{FaqAccordion, FAQ_ITEMS};

#[test]
fn items_toggle_independently() {
    let mut accordion = FaqAccordion::new(FAQ_ITEMS.len());

    accordion.toggle(0);
    accordion.toggle(2);

    // Opening one never closes another.
    assert!(accordion.is_open(0));
    assert!(!accordion.is_open(1));
    assert!(accordion.is_open(2));

    accordion.toggle(0);
    assert!(!accordion.is_open(0));
    assert!(accordion.is_open(2));
}

#[test]
fn toggle_out_of_range_is_ignored() {
    let mut accordion = FaqAccordion::new(3);
    accordion.toggle(99);
    assert!(!accordion.is_open(99));
    assert!(!accordion.is_open(0));
}

#[test]
fn selection_wraps_both_directions() {
    let mut accordion = FaqAccordion::new(3);
    assert_eq!(accordion.selected, 0);

    accordion.select_prev();
    assert_eq!(accordion.selected, 2);

    accordion.select_next();
    assert_eq!(accordion.selected, 0);
}

#[test]
fn content_is_nonempty() {
    assert!(!FAQ_ITEMS.is_empty());
    for item in FAQ_ITEMS {
        assert!(!item.question.is_empty());
        assert!(!item.answer.is_empty());
    }
}
