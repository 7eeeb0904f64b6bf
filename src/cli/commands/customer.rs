use crate::cli::core::{
    expect_args, parse_decimal, parse_id, CommandError, CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::dto::{CustomerDto, CustomerUpdateDto};

const REGISTER_USAGE: &str =
    "customer register <first> <last> <cpf> <income> <email> <password> <zip> <street>";
const UPDATE_USAGE: &str = "customer update <id> <first> <last> <income> <zip> <street>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "customer",
        "Register, inspect, update or delete customers",
        "customer <register|show|find|update|delete> ...",
        cmd_customer,
    )]
}

fn cmd_customer(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: customer <register|show|find|update|delete> ...".into(),
        ));
    };

    match action.to_lowercase().as_str() {
        "register" => handle_register(context, rest),
        "show" => handle_show(context, rest),
        "find" => handle_find(context, rest),
        "update" => handle_update(context, rest),
        "delete" => handle_delete(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown customer subcommand `{}`",
            other
        ))),
    }
}

fn handle_register(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 8, REGISTER_USAGE)?;
    let dto = CustomerDto {
        first_name: args[0].to_string(),
        last_name: args[1].to_string(),
        cpf: args[2].to_string(),
        income: parse_decimal(args[3])?,
        email: args[4].to_string(),
        password: args[5].to_string(),
        zip_code: args[6].to_string(),
        street: args[7].to_string(),
    };
    let view = context.api().save_customer(&dto)?;
    output::json(&view)?;
    Ok(())
}

fn handle_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "customer show <id>")?;
    let view = context.api().find_customer(parse_id(args[0])?)?;
    output::json(&view)?;
    Ok(())
}

fn handle_find(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "customer find <cpf>")?;
    let view = context.api().find_customer_by_cpf(args[0])?;
    output::json(&view)?;
    Ok(())
}

fn handle_update(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 6, UPDATE_USAGE)?;
    let id = parse_id(args[0])?;
    let dto = CustomerUpdateDto {
        first_name: args[1].to_string(),
        last_name: args[2].to_string(),
        income: parse_decimal(args[3])?,
        zip_code: args[4].to_string(),
        street: args[5].to_string(),
    };
    let view = context.api().update_customer(id, &dto)?;
    output::json(&view)?;
    Ok(())
}

fn handle_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "customer delete <id>")?;
    let id = parse_id(args[0])?;
    context.api().delete_customer(id)?;
    output::success(format!("Customer {} deleted.", id));
    Ok(())
}
