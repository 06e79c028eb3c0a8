use std::{env, process};

use friendgraph::{
    FriendGraphError, GraphConfig, GraphStore, StoreKind, VertexId, dump_store_to_path,
    load_store_from_path, traverse,
};
use serde_json::json;

mod cli;
use cli::CommandLineConfig;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let store = match open_store(&config) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if let Err(err) = run_command(store.as_ref(), &config.command, &config.command_args) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn open_store(config: &CommandLineConfig) -> Result<Box<dyn GraphStore + Send + Sync>, String> {
    let kind = match config.store.as_str() {
        "list" => StoreKind::List,
        "matrix" => StoreKind::Matrix,
        other => return Err(format!("unsupported store {other}")),
    };
    if config.graph.is_empty() {
        return Err("a graph file is required (--graph PATH)".to_string());
    }
    load_store_from_path(&config.graph, &GraphConfig::new(kind)).map_err(|e| e.to_string())
}

fn run_command(
    store: &(dyn GraphStore + Send + Sync),
    command: &str,
    args: &[String],
) -> Result<(), FriendGraphError> {
    match command {
        "status" => {
            print_status(store);
            Ok(())
        }
        "friends" => {
            let id = required_id_value(args, "--id")?;
            if id < 0 || id >= store.vertex_count() as VertexId {
                return Err(FriendGraphError::invalid_endpoint(format!(
                    "id {id} is outside 0..{}",
                    store.vertex_count()
                )));
            }
            let friends = store.friends(id);
            for friend in &friends {
                println!("{friend}");
            }
            println!("friend_count={}", friends.len());
            Ok(())
        }
        "path" => {
            let from = required_id_value(args, "--from")?;
            let to = required_id_value(args, "--to")?;
            let algo = flag_value(args, "--algo").unwrap_or_else(|| "bfs".to_string());
            let path = match algo.as_str() {
                "bfs" => traverse::bfs(store, from, to)?,
                "dfs" => traverse::dfs(store, from, to)?,
                other => {
                    return Err(FriendGraphError::format(format!(
                        "unsupported algorithm {other}"
                    )));
                }
            };
            if path.is_empty() {
                println!("no connection found between {from} and {to}");
            } else {
                for pair in path.windows(2) {
                    println!("{} is friends with {}", pair[0], pair[1]);
                }
            }
            Ok(())
        }
        "print" => {
            print_store(store);
            Ok(())
        }
        "dump" => {
            let output = required_flag_value(args, "--output")?;
            dump_store_to_path(store, &output)?;
            println!("dump_written=\"{output}\"");
            Ok(())
        }
        other => {
            println!("unknown command {other}, defaulting to status");
            print_status(store);
            Ok(())
        }
    }
}

fn print_status(store: &(dyn GraphStore + Send + Sync)) {
    let summary = store.summary();
    let payload = json!({
        "command": "status",
        "store": summary.kind,
        "vertices": summary.vertex_count,
        "declared_edges": summary.declared_edge_count,
        "recorded_edges": summary.recorded_edge_count,
    });
    println!("{payload}");
}

fn print_store(store: &(dyn GraphStore + Send + Sync)) {
    match store.kind() {
        StoreKind::List => {
            for i in 0..store.vertex_count() as VertexId {
                let row: Vec<String> = store
                    .neighbors(i)
                    .iter()
                    .map(|id| id.to_string())
                    .collect();
                println!("{i}: {}", row.join(" "));
            }
        }
        StoreKind::Matrix => {
            for i in 0..store.vertex_count() as VertexId {
                let row: Vec<&str> = (0..store.vertex_count() as VertexId)
                    .map(|j| if store.has_edge(i, j) { "1" } else { "0" })
                    .collect();
                println!("{}", row.join(" "));
            }
        }
    }
}

fn required_flag_value(args: &[String], flag: &str) -> Result<String, FriendGraphError> {
    flag_value(args, flag)
        .ok_or_else(|| FriendGraphError::format(format!("{flag} is required")))
}

fn required_id_value(args: &[String], flag: &str) -> Result<VertexId, FriendGraphError> {
    let value = required_flag_value(args, flag)?;
    value.parse::<VertexId>().map_err(|_| {
        FriendGraphError::format(format!("{flag} expects an integer id, got {value:?}"))
    })
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == flag {
            return iter.next().cloned();
        }
    }
    None
}
