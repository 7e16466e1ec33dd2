use std::io;

use clap::Parser;
use serde::Serialize;
use warden_client::operations::policies::list::{self, PolicyList};

use super::view::{self, PolicyListView};
use crate::options::{EndpointOpt, PolicyFilterOpt, PolicyPageOpt, PolicySortOpt, ProfileOpt};
use crate::utils::client::ClientConfig;
use crate::{WardenOutput, WardenResult};

#[derive(Debug, Serialize, Parser)]
/// List policies as a table sorted by one column
///
/// With --interactive, the table stays open: type a column name to sort by
/// it (typing the active column again flips the direction), `n` or `p` to
/// change page, and `q` to quit.
pub struct List {
    #[clap(flatten)]
    sort: PolicySortOpt,

    #[clap(flatten)]
    filters: PolicyFilterOpt,

    #[clap(flatten)]
    page: PolicyPageOpt,

    /// Keep the table open and re-sort it from commands read on stdin
    #[arg(long, short = 'i')]
    interactive: bool,

    #[clap(flatten)]
    profile: ProfileOpt,

    #[clap(flatten)]
    endpoint: EndpointOpt,
}

impl List {
    pub async fn run(&self, client_config: ClientConfig) -> WardenResult<WardenOutput> {
        let client =
            client_config.get_client(&self.profile.profile_name, self.endpoint.as_deref())?;

        let mut view = PolicyListView::new(
            self.sort.sort_state(),
            self.filters.clone().into(),
            self.page.page_size,
        )
        .starting_at(self.page.page);

        if self.interactive {
            let mut service = PolicyList::new(client.graphql_service()?);
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout();
            view::run_interactive(&mut view, &mut service, stdin, &mut stdout).await?;
            return Ok(WardenOutput::EmptySuccess);
        }

        tracing::info!(sort = %view.sort(), "listing policies");
        let response = list::run(view.input(), &client).await?;
        Ok(WardenOutput::PolicyList(response))
    }
}
