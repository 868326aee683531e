//! 内置示例：调查问卷表单
//!
//! 覆盖全部字段类型，附带对应的校验函数

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Errors, FieldDescriptor, FieldOption, FieldType, FieldValue, FormProps, Schema, Values};

pub fn survey_props() -> FormProps {
    FormProps {
        name: "frm-survey".to_string(),
        ok_button_title: "SUBMIT".to_string(),
        show_reset_button: true,
        disable_buttons: false,
    }
}

pub fn survey_schema() -> Schema {
    Schema::new(vec![
        FieldDescriptor::new("first_name", FieldType::Text)
            .label("First Name")
            .label_info("(required)")
            .placeholder("John")
            .length(Some(5), Some(20)),
        FieldDescriptor::new("last_name", FieldType::Text)
            .label("Last Name")
            .label_info("(required)")
            .placeholder("Doe")
            .length(Some(5), Some(20)),
        FieldDescriptor::new("email", FieldType::Email)
            .label("Email Address")
            .label_info("(required)")
            .placeholder("johndoe@email.com"),
        FieldDescriptor::new("confirm_email", FieldType::Email)
            .label("Confirm Email Address")
            .label_info("(required)")
            .placeholder("johndoe@email.com"),
        FieldDescriptor::new("phone", FieldType::Tel)
            .label("Telephone")
            .label_info("(required)")
            .placeholder("2652651765"),
        FieldDescriptor::new("description", FieldType::Textarea)
            .label("Description")
            .placeholder("This is description placeholder")
            .size(4, 100),
        FieldDescriptor::new("operating_system", FieldType::Radiogroup)
            .label("Operating System")
            .options(vec![
                FieldOption::value("Mac", "mac"),
                FieldOption::value("Windows", "windows"),
            ]),
        FieldDescriptor::new("mode_of_communication", FieldType::Checkboxgroup)
            .label("Choose your mode of communications")
            .label_info("Multi choice. At least one is required")
            .options(vec![
                FieldOption::named("moc_email", "Via Email"),
                FieldOption::named("moc_phone", "Contact Via Phone"),
                FieldOption::named("moc_mail", "Traditional Mail"),
            ]),
        FieldDescriptor::new("us_states", FieldType::Selectlist)
            .label("Select your state")
            .label_info("(Required)")
            .options(vec![
                FieldOption::value("Choose", ""),
                FieldOption::value("Pennsylvania", "PA"),
                FieldOption::value("Virginia", "VA"),
                FieldOption::value("New York", "NY"),
            ]),
    ])
}

pub fn survey_initial_values() -> Values {
    let text = [
        "first_name",
        "last_name",
        "email",
        "confirm_email",
        "phone",
        "description",
        "operating_system",
        "us_states",
    ]
    .into_iter()
    .map(|name| (name, FieldValue::from("")));
    let flags = ["moc_email", "moc_phone", "moc_mail"]
        .into_iter()
        .map(|name| (name, FieldValue::from(false)));
    text.chain(flags).collect()
}

/// 问卷校验：必填、邮箱格式、两次邮箱一致、至少一种联系方式
pub fn survey_validation(values: &Values) -> Errors {
    let mut errors = Errors::new();

    let required = [
        ("first_name", "↑ First Name is required."),
        ("last_name", "↑ Last Name is required."),
        ("phone", "↑ Phone Number is required."),
    ];
    for (name, message) in required {
        if !values.is_filled(name) {
            errors.insert(name, message);
        }
    }

    check_email(values, &mut errors, "email", "Email Address");
    check_email(values, &mut errors, "confirm_email", "Confirm Email Address");
    if values.get("email") != values.get("confirm_email") {
        errors.insert("email", "↑ Both Email Addresses must match.");
        errors.insert("confirm_email", "↑ Both Email Addresses must match.");
    }

    if !values.is_filled("us_states") {
        errors.insert("us_states", "↑ States is required.");
    }
    if !["moc_email", "moc_phone", "moc_mail"]
        .iter()
        .any(|name| values.is_filled(name))
    {
        errors.insert(
            "mode_of_communication",
            "↑ At least one is required from the above list.",
        );
    }
    if !values.is_filled("operating_system") {
        errors.insert("operating_system", "↑ This is a required field.");
    }

    errors
}

fn check_email(values: &Values, errors: &mut Errors, name: &str, label: &str) {
    if !values.is_filled(name) {
        errors.insert(name, format!("↑ {label} is required."));
    } else if !looks_like_email(values.text(name)) {
        errors.insert(name, format!("↑ {label} is invalid."));
    }
}

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// 含有形如 `x@y.z` 的片段（不含空白）
pub fn looks_like_email(s: &str) -> bool {
    EMAIL.is_match(s)
}
