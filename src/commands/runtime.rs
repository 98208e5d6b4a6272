use crate::cli::{Cli, Commands, ShapeArgs};
use crate::domain::models::{ProbeQuery, RunReport, Settings};
use crate::services::output::{banner, compact_lines, detailed_lines, print_one, summary_block};
use crate::services::probe::{
    run_default_probes, run_probe, summarize, FILTERED_PROBE, PLAIN_PROBE,
};

const TITLE: &str = "INDIAN GOVERNMENT MANDI PRICES API TEST";

pub fn handle_runtime_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::All) => {
            let probes = run_default_probes(settings);
            let summary = summarize(settings, &probes);
            let report = RunReport { probes, summary };
            print_one(cli.json, report.all_ok(), report, |r| {
                let mut lines = banner(TITLE);
                for p in &r.probes {
                    if p.name == PLAIN_PROBE {
                        lines.extend(detailed_lines(p));
                    } else {
                        lines.extend(compact_lines(p));
                    }
                }
                lines.extend(summary_block(&r.summary));
                lines
            })?;
        }
        Some(Commands::Fetch {
            limit,
            offset,
            show,
            shape,
        }) => {
            let query = shaped(ProbeQuery::new(*limit, *offset), shape);
            let report = run_probe(settings, PLAIN_PROBE, &query, *show);
            print_one(cli.json, report.outcome.is_success(), report, detailed_lines)?;
        }
        Some(Commands::Filter {
            commodity,
            state,
            district,
            market,
            limit,
            offset,
            show,
            shape,
        }) => {
            let mut query = ProbeQuery::new(*limit, *offset).filter("commodity", commodity);
            for (field, value) in [("state", state), ("district", district), ("market", market)] {
                if let Some(v) = value {
                    query = query.filter(field, v);
                }
            }
            let query = shaped(query, shape);
            let report = run_probe(settings, FILTERED_PROBE, &query, *show);
            print_one(cli.json, report.outcome.is_success(), report, compact_lines)?;
        }
    }
    Ok(())
}

fn shaped(mut query: ProbeQuery, shape: &ShapeArgs) -> ProbeQuery {
    if let Some(select) = &shape.select {
        query = query.select(select);
    }
    if let Some(order) = &shape.order {
        query = query.order(order);
    }
    query
}
