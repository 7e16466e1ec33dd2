//! The policy list as a stateful view.
//!
//! [`PolicyListView`] owns the active [`SortState`], the filters and the
//! current page, and turns user events into the next fetch. The interactive
//! session reads one command per line and finishes each command, including
//! its single re-fetch, before it reads the next one.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tower::{Service, ServiceExt};
use warden_client::WardenClientError;
use warden_client::operations::policies::list::{PolicyFilters, PolicyListInput, PolicyListResponse};
use warden_client::shared::{Paging, SortField, SortState, compute_next_sort_state};
use warden_std::Style;

use crate::command::output::policy_list_stdout;
use crate::{WardenError, WardenResult};

const FIRST_PAGE: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyListView {
    sort: SortState,
    filters: PolicyFilters,
    page: i64,
    page_size: Option<i64>,
}

impl PolicyListView {
    pub const fn new(sort: SortState, filters: PolicyFilters, page_size: Option<i64>) -> Self {
        PolicyListView {
            sort,
            filters,
            page: FIRST_PAGE,
            page_size,
        }
    }

    /// Opens the view on `page` instead of the first page
    pub fn starting_at(mut self, page: Option<i64>) -> Self {
        self.page = page.unwrap_or(FIRST_PAGE).max(FIRST_PAGE);
        self
    }

    pub const fn sort(&self) -> SortState {
        self.sort
    }

    pub const fn page(&self) -> i64 {
        self.page
    }

    /// The fetch that shows the view as it currently is
    pub fn input(&self) -> PolicyListInput {
        PolicyListInput {
            sort: self.sort,
            filters: self.filters.clone(),
            page: Some(self.page),
            page_size: self.page_size,
        }
    }

    /// Moves the sort to `field` and restarts from the first page, since a
    /// new ordering makes the old page position meaningless
    pub fn activate_header(&mut self, field: SortField) -> PolicyListInput {
        self.sort = compute_next_sort_state(self.sort, field);
        self.page = FIRST_PAGE;
        tracing::debug!(sort = %self.sort, "sort changed");
        self.input()
    }

    pub fn next_page(&mut self, paging: &Paging) -> Option<PolicyListInput> {
        if !paging.has_next() {
            return None;
        }
        self.page = paging.this_page + 1;
        Some(self.input())
    }

    pub fn previous_page(&mut self, paging: &Paging) -> Option<PolicyListInput> {
        if !paging.has_previous() {
            return None;
        }
        self.page = paging.this_page - 1;
        Some(self.input())
    }
}

/// One line of input in an interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    Sort(SortField),
    Next,
    Previous,
    Quit,
}

impl FromStr for ViewCommand {
    type Err = WardenClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "next" => Ok(ViewCommand::Next),
            "p" | "prev" | "previous" => Ok(ViewCommand::Previous),
            "q" | "quit" | "exit" => Ok(ViewCommand::Quit),
            _ => SortField::parse(s).map(ViewCommand::Sort),
        }
    }
}

async fn fetch<S>(service: &mut S, input: PolicyListInput) -> Result<PolicyListResponse, WardenClientError>
where
    S: Service<PolicyListInput, Response = PolicyListResponse, Error = WardenClientError>,
{
    service.ready().await?.call(input).await
}

fn render<W: Write>(output: &mut W, response: &PolicyListResponse) -> io::Result<()> {
    writeln!(output, "{}", policy_list_stdout(response))
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(
        output,
        "{} ",
        Style::Muted.paint("sort by [id|resource-types|severity|status|last-modified], n/p to page, q to quit >")
    )?;
    output.flush()
}

/// Runs an interactive session until `q` or the end of `input`, returning
/// the last page shown.
///
/// A failed re-fetch is reported and the view goes back to the state that
/// produced the table on screen.
pub async fn run_interactive<S, R, W>(
    view: &mut PolicyListView,
    service: &mut S,
    input: R,
    output: &mut W,
) -> WardenResult<PolicyListResponse>
where
    S: Service<PolicyListInput, Response = PolicyListResponse, Error = WardenClientError>,
    R: BufRead,
    W: Write,
{
    let mut shown = fetch(service, view.input()).await?;
    render(output, &shown)?;
    prompt(output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(output)?;
            continue;
        }

        let previous = view.clone();
        let request = match line.parse::<ViewCommand>() {
            Ok(ViewCommand::Quit) => break,
            Ok(ViewCommand::Sort(field)) => Some(view.activate_header(field)),
            Ok(ViewCommand::Next) => {
                let request = view.next_page(&shown.paging);
                if request.is_none() {
                    writeln!(output, "Already on the last page.")?;
                }
                request
            }
            Ok(ViewCommand::Previous) => {
                let request = view.previous_page(&shown.paging);
                if request.is_none() {
                    writeln!(output, "Already on the first page.")?;
                }
                request
            }
            Err(err) => {
                write!(output, "{}", WardenError::new(err))?;
                None
            }
        };

        if let Some(request) = request {
            match fetch(service, request).await {
                Ok(response) => {
                    shown = response;
                    render(output, &shown)?;
                }
                Err(err) => {
                    *view = previous;
                    write!(output, "{}", WardenError::new(err))?;
                }
            }
        }
        prompt(output)?;
    }

    writeln!(output)?;
    Ok(shown)
}
