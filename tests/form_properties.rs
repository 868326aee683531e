//! 表单组件的属性测试
//!
//! 覆盖渲染分发、变更合并、提交与重置

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use ratatui::{Terminal, backend::TestBackend};
use xform::form::view::layouts::field_groups;
use xform::{
    ChangeEvent, Errors, FieldDescriptor, FieldOption, FieldType, FieldValue, Form, FormProps,
    Schema, SubmitOutcome, Values, render,
};

const TYPES: [FieldType; 9] = [
    FieldType::Text,
    FieldType::Email,
    FieldType::Password,
    FieldType::Tel,
    FieldType::Textarea,
    FieldType::Radiogroup,
    FieldType::Checkboxgroup,
    FieldType::Selectlist,
    FieldType::Unsupported,
];

fn schema_of(types: &[FieldType]) -> Schema {
    types
        .iter()
        .enumerate()
        .map(|(i, &ty)| {
            FieldDescriptor::new(format!("f{i}"), ty)
                .label(label_of(i))
                .options(vec![
                    FieldOption::value("One", "1"),
                    FieldOption::named(format!("f{i}_opt"), "Two"),
                ])
        })
        .collect::<Vec<_>>()
        .into()
}

/// 带尖括号，避免 <L1> 与 <L10> 互相包含
fn label_of(i: usize) -> String {
    format!("<L{i}>")
}

fn draw(form: &Form, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| render(f, form)).unwrap();
    let buf = terminal.backend().buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_values(texts: &[String]) -> Values {
    texts
        .iter()
        .enumerate()
        .map(|(i, s)| (format!("f{i}"), FieldValue::from(s.as_str())))
        .collect()
}

proptest! {
    #[test]
    fn rendered_groups_match_supported_fields(picks in prop::collection::vec(0usize..9, 0..12)) {
        let types: Vec<FieldType> = picks.iter().map(|&i| TYPES[i]).collect();
        let form = Form::new(FormProps::named("p"), schema_of(&types), Values::new());

        let supported = types.iter().filter(|t| **t != FieldType::Unsupported).count();
        prop_assert_eq!(field_groups(&form).len(), supported);

        // 足够高，所有分组同时可见
        let screen = draw(&form, 60, 100);
        for (i, ty) in types.iter().enumerate() {
            let expected = usize::from(*ty != FieldType::Unsupported);
            prop_assert_eq!(screen.matches(&label_of(i)).count(), expected, "{}", screen);
        }
    }

    #[test]
    fn change_touches_only_target_field(
        texts in prop::collection::vec("[a-z]{0,8}", 1..8),
        target in any::<prop::sample::Index>(),
        new_value in "[a-zA-Z0-9 ]{0,12}",
    ) {
        let initial = text_values(&texts);
        let mut form = Form::new(FormProps::default(), Schema::default(), initial.clone());
        let target = target.index(texts.len());
        let name = format!("f{target}");

        form.handle_change(ChangeEvent::value(name.clone(), new_value.clone()));

        for (key, value) in initial.iter() {
            if *key == name {
                prop_assert_eq!(form.values().get(key), Some(&FieldValue::Text(new_value.clone())));
            } else {
                prop_assert_eq!(form.values().get(key), Some(value));
            }
        }
        prop_assert_eq!(form.values().len(), initial.len());
    }

    #[test]
    fn checkbox_changes_store_booleans(checked in any::<bool>(), text in "[a-z]{0,8}") {
        let mut form = Form::new(FormProps::default(), Schema::default(), Values::new());

        form.handle_change(ChangeEvent::checked("box", checked));
        form.handle_change(ChangeEvent::value("line", text.clone()));

        prop_assert_eq!(form.values().get("box"), Some(&FieldValue::Bool(checked)));
        prop_assert_eq!(form.values().get("line"), Some(&FieldValue::Text(text)));
    }

    #[test]
    fn success_fires_iff_no_errors(
        texts in prop::collection::vec("[a-z]{0,4}", 1..6),
        failing in prop::collection::vec(any::<bool>(), 1..6),
    ) {
        let calls = Rc::new(RefCell::new(Vec::<Values>::new()));
        let seen_by_validator = calls.clone();
        let successes = Rc::new(RefCell::new(0u32));
        let counter = successes.clone();
        let failing_names: Vec<String> = failing
            .iter()
            .enumerate()
            .filter(|(_, fail)| **fail)
            .map(|(i, _)| format!("f{i}"))
            .collect();
        let expected_errors = failing_names.len();

        let initial = text_values(&texts);
        let mut form = Form::new(FormProps::default(), Schema::default(), initial.clone())
            .on_validate(move |values| {
                seen_by_validator.borrow_mut().push(values.clone());
                failing_names.iter().map(|n| (n.clone(), "bad")).collect::<Errors>()
            })
            .on_success(move |_| *counter.borrow_mut() += 1);

        let outcome = form.handle_submit();

        prop_assert_eq!(calls.borrow().len(), 1);
        prop_assert_eq!(&calls.borrow()[0], &initial);
        prop_assert_eq!(form.errors().len(), expected_errors);
        if expected_errors == 0 {
            prop_assert_eq!(outcome, SubmitOutcome::Accepted);
            prop_assert_eq!(*successes.borrow(), 1);
        } else {
            prop_assert_eq!(outcome, SubmitOutcome::Rejected { errors: expected_errors });
            prop_assert_eq!(*successes.borrow(), 0);
        }
    }

    #[test]
    fn reset_restores_initial_values(
        texts in prop::collection::vec("[a-z]{0,6}", 1..6),
        edits in prop::collection::vec(("[a-z]{1,3}", any::<bool>()), 0..10),
    ) {
        let initial = text_values(&texts);
        let mut form = Form::new(FormProps::default(), Schema::default(), initial.clone());

        for (i, (value, as_checkbox)) in edits.into_iter().enumerate() {
            let name = format!("f{}", i % (texts.len() + 1));
            if as_checkbox {
                form.handle_change(ChangeEvent::checked(name, true));
            } else {
                form.handle_change(ChangeEvent::value(name, value));
            }
        }
        form.handle_reset();

        prop_assert_eq!(form.values(), &initial);
        prop_assert_eq!(form.values(), form.initial_values());
    }
}

#[test]
fn required_field_example() {
    let schema = Schema::new(vec![FieldDescriptor::new("a", FieldType::Text)]);
    let initial: Values = [("a", "")].into_iter().collect();
    let successes = Rc::new(RefCell::new(Vec::new()));
    let seen = successes.clone();

    let mut form = Form::new(FormProps::default(), schema, initial)
        .on_validate(|v| {
            if v.is_filled("a") {
                Errors::new()
            } else {
                [("a", "required")].into_iter().collect()
            }
        })
        .on_success(move |v| seen.borrow_mut().push(v.clone()));

    form.handle_submit();
    assert_eq!(form.errors().get("a"), Some("required"));
    assert_eq!(form.errors().len(), 1);
    assert!(successes.borrow().is_empty());

    form.handle_change(ChangeEvent::value("a", "x"));
    form.handle_submit();
    assert!(form.errors().is_empty());
    let expected: Values = [("a", "x")].into_iter().collect();
    assert_eq!(successes.borrow().as_slice(), &[expected]);
}
