use argp::FromArgs;

#[derive(FromArgs, PartialEq, Eq, Debug)]
/// Send GitHub workflow notifications to Google Chat.
pub struct TopLevel {
    #[argp(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand)]
pub enum Command {
    Chat(ChatArgs),
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
/// Send messages to Google Chat spaces.
#[argp(subcommand, name = "chat")]
pub struct ChatArgs {
    #[argp(subcommand)]
    pub command: ChatCommand,
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
#[argp(subcommand)]
pub enum ChatCommand {
    WorkflowNotification(WorkflowNotificationArgs),
}

#[derive(FromArgs, PartialEq, Eq, Debug)]
/// Send a workflow failure notification to a Google Chat space.
///
/// Reads the GITHUB_CONTEXT and JOB_CONTEXT environment variables and only
/// sends a message when the job status is "failure".
#[argp(subcommand, name = "workflownotification")]
pub struct WorkflowNotificationArgs {
    #[argp(option, arg_name = "URL")]
    /// webhook URL from google chat, e.g.
    /// https://chat.googleapis.com/v1/spaces/<SPACE_ID>/messages?key=<KEY>&token=<TOKEN>
    /// (defaults to WEBHOOK_URL)
    pub webhook_url: Option<String>,
}
