//! A sign-up form driven the way a host toolkit would drive it.

use rux::prelude::*;
use rux::{Interaction, validated_text};

fn name_input() -> ValidatingInput {
    ValidatingInput::default()
        .with_rule(ValidatorRule::required("Name is required"))
        .with_rule(ValidatorRule::predicate(
            |s| s.chars().all(|c| c.is_alphabetic() || c == ' '),
            "Only letters and spaces",
        ))
}

fn email_input() -> ValidatingInput {
    ValidatingInput::default()
        .with_rule(ValidatorRule::required("Email is required"))
        .with_rule(ValidatorRule::predicate(|s| s.contains('@'), "Missing @"))
        .with_rule(ValidatorRule::message(|s| {
            s.contains(' ').then(|| format!("No spaces allowed ({} found)", s.matches(' ').count()))
        }))
}

#[test]
fn untouched_form_is_submittable() {
    let name = name_input();
    let email = email_input();
    assert!(all_valid([&name, &email]));
    assert_eq!(name.visual_state().name(), "Normal");
}

#[test]
fn typing_drives_errors_hint_and_detail() {
    let mut email = email_input();

    email.handle_signal(HostSignal::GotFocus);
    assert_eq!(email.visual_state().name(), "Focused");

    let eval = email.set_text("a b");
    assert!(eval.changed);
    assert_eq!(email.errors(), ["Missing @", "No spaces allowed (1 found)"]);
    assert!(email.hint_visible());
    assert_eq!(email.visual_state().name(), "FocusedError");
    assert_eq!(
        email.error_detail().content(),
        "● Missing @\n● No spaces allowed (1 found)"
    );
    assert!(email.error_detail().is_open());

    // Same error set: nothing to redraw.
    let eval = email.set_text("a c");
    assert!(!eval.changed);

    email.handle_signal(HostSignal::LostFocus);
    assert!(!email.error_detail().is_open());
    assert_eq!(email.visual_state().interaction, Interaction::Normal);

    email.handle_signal(HostSignal::HintTapped);
    assert!(email.error_detail().is_open());

    email.set_text("a@c");
    assert!(email.is_valid());
    assert!(!email.hint_visible());
    assert_eq!(email.visual_state().name(), "Normal");
    assert_eq!(validated_text(&email).unwrap(), "a@c");
}

#[test]
fn submit_is_blocked_until_every_field_passes() {
    let mut name = name_input();
    let mut email = email_input();

    name.set_text("R2D2");
    assert!(!all_valid([&name, &email]));
    assert!(matches!(
        validated_text(&name),
        Err(Error::Invalid { errors }) if errors == ["Only letters and spaces"]
    ));

    name.set_text("Ada Lovelace");
    email.set_text("ada@example.com");
    assert!(all_valid([&name, &email]));
}

#[test]
fn submit_marks_untouched_fields_dirty() {
    let mut name = name_input();
    let mut email = email_input().with_text("ada@example.com");
    assert!(all_valid([&name, &email]));

    for input in [&mut name, &mut email] {
        input.mark_dirty();
    }
    assert!(!all_valid([&name, &email]));
    assert_eq!(name.errors(), ["Name is required"]);
    assert!(name.hint_visible());
    assert_eq!(name.visual_state().name(), "NormalError");
    assert!(email.is_valid());
    assert!(!email.hint_visible());
}

#[test]
fn reset_after_submit_returns_to_pristine() {
    let mut name = name_input();
    name.set_text("x");
    name.set_text("");
    assert!(!name.is_valid());

    name.reset_dirty();
    assert!(name.is_valid());
    assert!(!name.is_dirty());
    assert!(!name.hint_visible());
    assert_eq!(name.error_detail().content(), "");
    assert_eq!(name.visual_state().name(), "Normal");
}

#[test]
fn disabled_input_keeps_error_axis() {
    let mut email = email_input();
    email.set_text("nope");
    email.handle_signal(HostSignal::EnabledChanged(false));
    assert_eq!(email.visual_state().name(), "DisabledError");
    email.handle_signal(HostSignal::EnabledChanged(true));
    assert_eq!(email.visual_state().name(), "NormalError");
}

#[cfg(feature = "markup")]
#[test]
fn form_label_uses_markup() {
    use rux::{ColorTransformer, StyleFlags};

    let label = format_inline(
        "<format><bold>Email</bold> <red>*</red></format>",
        &DefaultTransformer.or(ColorTransformer),
    );
    let runs = label.flatten();
    assert_eq!(label.to_plain_text(), "Email *");
    assert!(runs[0].style.has_attr(StyleFlags::BOLD));
    assert_eq!(runs[2].style.fg, Some(rux::PackedRgba::RED));
}
