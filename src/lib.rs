pub mod io;
pub mod models;
pub mod pipeline;

pub use io::{
    parse_group_export_file, parse_group_export_json, parse_knockout_file, parse_knockout_json,
    write_group_matches, write_knockout_matches, write_teams, ParseError,
};
pub use models::{FifaMatch, FifaStage, GroupStageExport, MatchRecord, Phase, Roster, Team};
pub use pipeline::{
    classify_stage, run_group_stage, run_knockout, FlagUrlConfig, GroupStageOutput, LocaleResolver,
    Normalizer,
};
