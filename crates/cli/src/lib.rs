pub mod commands;
pub mod controller;
pub mod view;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use commands::RunOptions;

#[derive(Debug, Parser)]
#[command(
    name = "mostrador",
    about = "Mostrador storefront CLI",
    long_about = "Browse the product catalog, create products, place orders, and inspect shipping costs against a Mostrador store service.",
    after_help = "Examples:\n  mostrador products list\n  mostrador products add --name Widget --price 9.50 --stock 10\n  mostrador orders place --product 1 --quantity 2 --weight 1.5 --distance 10\n  mostrador doctor --json"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Store service base URL (overrides config and env)")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Work with the product catalog")]
    Products {
        #[command(subcommand)]
        command: ProductCommand,
    },
    #[command(about = "Work with the order history")]
    Orders {
        #[command(subcommand)]
        command: OrderCommand,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and store service reachability")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
enum ProductCommand {
    #[command(about = "Fetch and render the product catalog")]
    List,
    #[command(about = "Create a product in the catalog")]
    Add(AddProductArgs),
}

#[derive(Debug, Args)]
struct AddProductArgs {
    #[arg(long, help = "Product name")]
    name: String,
    #[arg(long, help = "Unit price, e.g. 9.50", allow_hyphen_values = true)]
    price: Decimal,
    #[arg(long, help = "Units in stock", allow_hyphen_values = true)]
    stock: i64,
}

#[derive(Debug, Subcommand)]
enum OrderCommand {
    #[command(about = "Fetch and render the order history")]
    List,
    #[command(about = "Place an order and show the confirmed costs")]
    Place(PlaceOrderArgs),
}

#[derive(Debug, Args)]
struct PlaceOrderArgs {
    #[arg(long, help = "Product id", allow_hyphen_values = true)]
    product: i64,
    #[arg(long, help = "Units to order", allow_hyphen_values = true)]
    quantity: i64,
    #[arg(long, help = "Package weight in kilograms", allow_hyphen_values = true)]
    weight: f64,
    #[arg(long, help = "Shipping distance in kilometers", allow_hyphen_values = true)]
    distance: f64,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = RunOptions { base_url: cli.base_url };

    let result = match cli.command {
        Command::Products { command } => match command {
            ProductCommand::List => commands::products::list(&options),
            ProductCommand::Add(args) => {
                commands::products::add(&options, &args.name, args.price, args.stock)
            }
        },
        Command::Orders { command } => match command {
            OrderCommand::List => commands::orders::list(&options),
            OrderCommand::Place(args) => commands::orders::place(
                &options,
                args.product,
                args.quantity,
                args.weight,
                args.distance,
            ),
        },
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run(&options) }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(&options, json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
