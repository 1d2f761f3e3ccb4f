use clap::{Args, Parser, Subcommand, ValueEnum};

use farmdash::model::{ActionType, AmountType, Period};

#[derive(Parser, Debug)]
#[command(name = "farmdash", bin_name = "farmdash", version)]
#[command(about = "Farm inventory dashboard in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the API base URL for this run
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a session token obtained from the sign-in page
    Login {
        #[arg(long)]
        token: String,
        /// Cached user profile (JSON)
        #[arg(long)]
        user: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Manage products
    #[command(subcommand)]
    Products(ProductCommands),
    /// Record and browse inventory actions
    #[command(subcommand)]
    Actions(ActionCommands),
    /// Show the running cash balance
    Balance,
    /// Show income/outcome statistics
    Stats {
        #[arg(long, value_enum, default_value_t = PeriodArg::Month)]
        period: PeriodArg,
        #[arg(long)]
        year: String,
        /// Two-digit month, required for monthly statistics
        #[arg(long)]
        month: Option<String>,
        /// Limit to one product id
        #[arg(long)]
        product: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    List {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Search by name and description
        #[arg(long)]
        search: Option<String>,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long)]
        amount: f64,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ActionCommands {
    List(ActionListArgs),
    Add(ActionArgs),
    Update {
        id: String,
        #[command(flatten)]
        action: ActionArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct ActionListArgs {
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
    #[arg(long = "type", value_enum)]
    pub action_type: Option<ActionTypeArg>,
    #[arg(long, value_enum)]
    pub amount_type: Option<AmountTypeArg>,
    /// Product id
    #[arg(long)]
    pub product: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// Search the type description
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub income: Option<f64>,
    #[arg(long)]
    pub outcome: Option<f64>,
}

#[derive(Args, Debug)]
pub struct ActionArgs {
    #[arg(long = "type", value_enum)]
    pub action_type: ActionTypeArg,
    #[arg(long)]
    pub type_desc: Option<String>,
    #[arg(long, value_enum)]
    pub amount_type: AmountTypeArg,
    #[arg(long)]
    pub amount: f64,
    #[arg(long)]
    pub product: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub income: Option<f64>,
    #[arg(long)]
    pub outcome: Option<f64>,
    #[arg(long)]
    pub desc: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ActionTypeArg {
    Buy,
    Other,
}

impl From<ActionTypeArg> for ActionType {
    fn from(arg: ActionTypeArg) -> Self {
        match arg {
            ActionTypeArg::Buy => ActionType::Buy,
            ActionTypeArg::Other => ActionType::Other,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AmountTypeArg {
    Piece,
    Kg,
    Litre,
}

impl From<AmountTypeArg> for AmountType {
    fn from(arg: AmountTypeArg) -> Self {
        match arg {
            AmountTypeArg::Piece => AmountType::Piece,
            AmountTypeArg::Kg => AmountType::Kg,
            AmountTypeArg::Litre => AmountType::Litre,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Month,
    Year,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Month => Period::Month,
            PeriodArg::Year => Period::Year,
        }
    }
}
