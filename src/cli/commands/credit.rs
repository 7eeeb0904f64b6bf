use crate::cli::core::{
    expect_args, parse_count, parse_date, parse_decimal, parse_id, parse_uuid, CommandError,
    CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::dto::CreditDto;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "credit",
        "Apply for credit and look up a customer's credits",
        "credit <apply|list|show> ...",
        cmd_credit,
    )]
}

fn cmd_credit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: credit <apply|list|show> ...".into(),
        ));
    };

    match action.to_lowercase().as_str() {
        "apply" => handle_apply(context, rest),
        "list" => handle_list(context, rest),
        "show" => handle_show(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown credit subcommand `{}`",
            other
        ))),
    }
}

fn handle_apply(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(
        args,
        4,
        "credit apply <customerId> <value> <YYYY-MM-DD> <installments>",
    )?;
    let dto = CreditDto {
        customer_id: parse_id(args[0])?,
        credit_value: parse_decimal(args[1])?,
        day_first_installment: parse_date(args[2])?,
        number_of_installments: parse_count(args[3])?,
    };
    let view = context.api().save_credit(&dto)?;
    output::json(&view)?;
    Ok(())
}

fn handle_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 1, "credit list <customerId>")?;
    let rows = context
        .api()
        .find_all_credits_by_customer(parse_id(args[0])?)?;
    output::json(&rows)?;
    Ok(())
}

fn handle_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_args(args, 2, "credit show <customerId> <creditCode>")?;
    let customer_id = parse_id(args[0])?;
    let credit_code = parse_uuid(args[1])?;
    let view = context.api().find_credit_by_code(customer_id, credit_code)?;
    output::json(&view)?;
    Ok(())
}
