//! Command dispatch for the `farmdash` binary.
//!
//! This is the only layer that touches stdout and exit codes. Everything it
//! calls returns data; rendering lives in [`super::render`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use farmdash::api::{ActionsApi, ApiClient, ProductsApi};
use farmdash::config::Config;
use farmdash::list::{ListQuery, LoadStatus};
use farmdash::model::{
    Action, ActionRequest, Period, ProductPatch, ProductRequest, StatisticsQuery,
};
use farmdash::notify::ConsoleNotifier;
use farmdash::query::{ActionFilters, ProductFilters};
use farmdash::session::{FileSessionStore, Navigator, SessionStore, TOKEN_KEY, USER_KEY};

use super::args::{ActionArgs, ActionCommands, ActionListArgs, Cli, Commands, ProductCommands};
use super::render;

/// Exit status after the server rejected the stored session.
pub const SIGNED_OUT_EXIT: i32 = 2;

/// The terminal has no sign-in page; point the user at `login` instead.
#[derive(Default)]
struct TerminalNavigator {
    signed_out: AtomicBool,
}

impl TerminalNavigator {
    fn signed_out(&self) -> bool {
        self.signed_out.load(Ordering::SeqCst)
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        if !self.signed_out.swap(true, Ordering::SeqCst) {
            eprintln!(
                "Session expired ({}). Run `farmdash login --token <TOKEN>` to sign in again.",
                path
            );
        }
    }
}

struct AppContext {
    store: Arc<FileSessionStore>,
    navigator: Arc<TerminalNavigator>,
    client: ApiClient,
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = Config::load(cli.base_url.clone()).context("failed to load configuration")?;
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");

    let store = Arc::new(FileSessionStore::new(config.session_path()));
    let navigator = Arc::new(TerminalNavigator::default());
    let client = ApiClient::new(
        &config,
        store.clone(),
        Arc::new(ConsoleNotifier),
        navigator.clone(),
    )?;

    Ok(AppContext {
        store,
        navigator,
        client,
    })
}

pub async fn run(cli: Cli) -> Result<()> {
    let ctx = init_context(&cli)?;

    let result = match cli.command {
        Commands::Login { token, user } => handle_login(&ctx, &token, user.as_deref()),
        Commands::Logout => handle_logout(&ctx),
        Commands::Products(cmd) => handle_products(&ctx, cmd).await,
        Commands::Actions(cmd) => handle_actions(&ctx, cmd).await,
        Commands::Balance => handle_balance(&ctx).await,
        Commands::Stats {
            period,
            year,
            month,
            product,
        } => {
            let month = match month {
                Some(m) => Some(normalize_month(&m)?),
                None => None,
            };
            let query = StatisticsQuery {
                period: period.into(),
                year,
                month,
                product_id: product,
            };
            handle_stats(&ctx, query).await
        }
    };

    if ctx.navigator.signed_out() {
        std::process::exit(SIGNED_OUT_EXIT);
    }
    result
}

fn handle_login(ctx: &AppContext, token: &str, user: Option<&str>) -> Result<()> {
    if token.trim().is_empty() {
        bail!("token must not be empty");
    }
    ctx.store.set(TOKEN_KEY, token)?;
    match user {
        Some(user) => {
            serde_json::from_str::<serde_json::Value>(user).context("--user must be JSON")?;
            ctx.store.set(USER_KEY, user)?;
        }
        None => ctx.store.clear(USER_KEY)?,
    }
    println!("Session saved to {}", ctx.store.path().display());
    Ok(())
}

fn handle_logout(ctx: &AppContext) -> Result<()> {
    ctx.store.clear(TOKEN_KEY)?;
    ctx.store.clear(USER_KEY)?;
    println!("Signed out");
    Ok(())
}

async fn handle_products(ctx: &AppContext, cmd: ProductCommands) -> Result<()> {
    let api = ProductsApi::new(ctx.client.clone());
    match cmd {
        ProductCommands::List { page, search } => {
            let filters = ProductFilters {
                page,
                search_key: search.unwrap_or_default(),
                ..Default::default()
            };
            let mut list = ListQuery::with_filters(api, filters);
            let state = list.load().await;
            if let LoadStatus::Failed { message } = &state.status {
                bail!("failed to load products: {}", message);
            }
            println!(
                "{}",
                render::list_view(state, render::products_table(&state.items), "المنتجات")
            );
        }
        ProductCommands::Add { name, desc, amount } => {
            let response = api.add(&ProductRequest { name, desc, amount }).await?;
            if let Some(product) = response.product {
                println!("{}", render::product_detail(&product));
            }
        }
        ProductCommands::Update {
            id,
            name,
            desc,
            amount,
        } => {
            let patch = ProductPatch { name, desc, amount };
            if patch.is_empty() {
                bail!("nothing to update: pass --name, --desc or --amount");
            }
            let response = api.update(&id, &patch).await?;
            if let Some(product) = response.product {
                println!("{}", render::product_detail(&product));
            }
        }
        ProductCommands::Delete { id } => {
            api.delete(&id).await?;
        }
    }
    Ok(())
}

async fn handle_actions(ctx: &AppContext, cmd: ActionCommands) -> Result<()> {
    let products = ProductsApi::new(ctx.client.clone());
    let api = ActionsApi::new(ctx.client.clone());
    match cmd {
        ActionCommands::List(args) => {
            let mut list = ListQuery::with_filters(api.clone(), action_filters(args));
            let (state, options, balance) =
                tokio::join!(list.load(), products.options(), api.balance());

            if let LoadStatus::Failed { message } = &state.status {
                bail!("failed to load actions: {}", message);
            }
            let options = options.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "product options unavailable");
                Vec::new()
            });
            println!(
                "{}",
                render::list_view(
                    state,
                    render::actions_table(&state.items, &options),
                    "الإجراءات"
                )
            );
            match balance {
                Ok(balance) => println!("{}", render::balance_line(&balance)),
                Err(e) => tracing::warn!(error = %e, "balance unavailable"),
            }
        }
        ActionCommands::Add(args) => {
            let response = api.add(&action_request(args)).await?;
            print_action(&products, response.action).await;
        }
        ActionCommands::Update { id, action } => {
            let response = api.update(&id, &action_request(action)).await?;
            print_action(&products, response.action).await;
        }
        ActionCommands::Delete { id } => {
            api.delete(&id).await?;
        }
    }
    Ok(())
}

async fn print_action(products: &ProductsApi, action: Option<Action>) {
    let Some(action) = action else {
        return;
    };
    let options = products.options().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "product options unavailable");
        Vec::new()
    });
    println!("{}", render::action_detail(&action, &options));
}

async fn handle_balance(ctx: &AppContext) -> Result<()> {
    let balance = ActionsApi::new(ctx.client.clone()).balance().await?;
    println!("{}", render::balance_line(&balance));
    Ok(())
}

async fn handle_stats(ctx: &AppContext, query: StatisticsQuery) -> Result<()> {
    if query.period == Period::Month && query.month.is_none() {
        bail!("--month is required for monthly statistics");
    }
    let report = ActionsApi::new(ctx.client.clone())
        .statistics(&query)
        .await?;
    println!("{}", render::statistics(&report));
    Ok(())
}

fn action_filters(args: ActionListArgs) -> ActionFilters {
    ActionFilters {
        page: args.page,
        action_type: args.action_type.map(Into::into),
        search_key: args.search.unwrap_or_default(),
        amount_type: args.amount_type.map(Into::into),
        product: args.product,
        date: args.date,
        income: args.income,
        outcome: args.outcome,
        ..Default::default()
    }
}

fn action_request(args: ActionArgs) -> ActionRequest {
    ActionRequest {
        action_type: args.action_type.into(),
        type_desc: args.type_desc,
        amount_type: args.amount_type.into(),
        amount: args.amount,
        product: args.product,
        date: args.date,
        income: args.income,
        outcome: args.outcome,
        desc: args.desc,
    }
}

/// `3` and `03` both become `03`.
fn normalize_month(month: &str) -> Result<String> {
    let value: u32 = month
        .trim()
        .parse()
        .with_context(|| format!("invalid month '{}'", month))?;
    if !(1..=12).contains(&value) {
        bail!("month must be between 1 and 12, got {}", value);
    }
    Ok(format!("{:02}", value))
}
