#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub store: String,
    pub graph: String,
    pub command: String,
    pub command_args: Vec<String>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut store = String::from("list");
        let mut graph = String::new();
        let mut command = String::from("status");
        let mut command_args = Vec::new();
        let mut command_set = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            if command_set {
                command_args.push(arg.to_string());
                continue;
            }
            match *arg {
                "--store" => {
                    store = iter
                        .next()
                        .ok_or_else(|| "--store requires a value".to_string())?
                        .to_string();
                }
                "--graph" | "--file" => {
                    graph = iter
                        .next()
                        .ok_or_else(|| "--graph requires a value".to_string())?
                        .to_string();
                }
                "--command" => {
                    command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                    command_set = true;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    command = arg.to_string();
                    command_set = true;
                }
            }
        }
        Ok(Self {
            store,
            graph,
            command,
            command_args,
        })
    }

    pub fn help() -> &'static str {
        r#"Usage: friendgraph --graph PATH [--store list|matrix] [--command status]

Commands:
  status                        Show the loaded graph's summary as JSON
  friends --id N                List N's friends, one id per line
  path --from A --to B          Find a connection from A to B
       [--algo bfs|dfs]         Search algorithm (default: bfs)
  print                         Render the adjacency structure
  dump --output PATH            Write a loadable edge-list file

The graph file starts with a `vertices edges` header line followed by one
`i j` edge per line. Ids range from 0 to vertices - 1.

Examples:
  friendgraph --graph network.txt status
  friendgraph --graph network.txt friends --id 3
  friendgraph --graph network.txt --store matrix path --from 0 --to 7
  friendgraph --graph network.txt path --from 0 --to 7 --algo dfs
  friendgraph --graph network.txt dump --output copy.txt
"#
    }
}
