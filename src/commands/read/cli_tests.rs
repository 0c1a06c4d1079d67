//! CLI parsing tests for read commands using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::db::Value;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_option_test! {
        command: "select-all",
        variant: SelectAll,
        test_name: test_select_all_table,
        args: ["users"],
        field: table,
        expected: "users",
    }

    crate::cli_option_test! {
        command: "select-page",
        variant: SelectPage,
        test_name: test_select_page_from,
        args: ["users", "--from", "11", "--to", "20"],
        field: from,
        expected: 11,
    }

    crate::cli_option_test! {
        command: "select-page",
        variant: SelectPage,
        test_name: test_select_page_to,
        args: ["users", "--from", "11", "--to", "20"],
        field: to,
        expected: 20,
    }

    crate::cli_required_arg_test! {
        command: "select-page",
        test_name: test_select_page_requires_from,
        args: ["users", "--to", "10"],
        required_arg: "--from",
    }

    crate::cli_required_arg_test! {
        command: "select-page",
        test_name: test_select_page_requires_to,
        args: ["users", "--from", "1"],
        required_arg: "--to",
    }

    crate::cli_error_test! {
        command: "select-page",
        test_name: test_select_page_rejects_zero_from,
        args: ["users", "--from", "0", "--to", "10"],
    }

    crate::cli_error_test! {
        command: "select-page",
        test_name: test_select_page_rejects_negative,
        args: ["users", "--from", "-1", "--to", "10"],
    }

    crate::cli_option_test! {
        command: "select-by",
        variant: SelectBy,
        test_name: test_select_by_typed_value,
        args: ["users", "--column", "id", "--value", "42"],
        field: value,
        expected: Value::Int(42),
    }

    crate::cli_option_test! {
        command: "select-by",
        variant: SelectBy,
        test_name: test_select_by_text_value,
        args: ["users", "-c", "email", "-v", "a@b.c"],
        field: value,
        expected: Value::Text("a@b.c".to_string()),
    }

    crate::cli_required_arg_test! {
        command: "select-by",
        test_name: test_select_by_requires_value,
        args: ["users", "--column", "id"],
        required_arg: "--value",
    }

    crate::cli_required_arg_test! {
        command: "select",
        test_name: test_select_requires_where,
        args: ["users"],
        required_arg: "--where",
    }

    crate::cli_option_test! {
        command: "select",
        variant: Select,
        test_name: test_select_filters,
        args: ["users", "--where", "status=active", "--where", "role=admin"],
        field: filters,
        expected: vec![
            ("status".to_string(), Value::Text("active".to_string())),
            ("role".to_string(), Value::Text("admin".to_string())),
        ],
    }
}
