use coastcore::advisory::{spectral_prompt, AdvisoryClient, AdvisoryPanel};
use coastcore::features::generate_features;
use coastcore::model::{
    baseline_stats, EcosystemStats, EcosystemTarget, SpectralIndex, Trend, REGIONS,
};
use coastcore::selection::SelectionState;
use iced::{
    widget::{
        button, canvas::Canvas, column, row, scrollable, space::horizontal as horizontal_space,
        text, text_input,
        Column, Container, Row,
    },
    Alignment, Color, Element, Length, Task, Theme,
};
use std::sync::Arc;

use charts::{CoverageChart, TrendChart, INDICATOR_SERIES};
use map::{tint, MapCanvas};

mod charts;
mod map;

fn main() -> iced::Result {
    dotenvy::dotenv().ok();
    env_logger::init();
    iced::application(Dashboard::boot, Dashboard::update, Dashboard::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Dashboard) -> String {
    "Kenyan Coastal Ecosystem Dashboard".into()
}

fn application_theme(_: &Dashboard) -> Theme {
    Theme::Dark
}

struct Dashboard {
    advisory: Arc<AdvisoryClient>,
    selection: SelectionState,
    selected_region: usize,
    panel: AdvisoryPanel,
    stats: Vec<EcosystemStats>,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    TargetToggled(EcosystemTarget),
    IndexToggled(SpectralIndex),
    RegionSelected(usize),
    QueryChanged(String),
    SubmitQuery,
    AnalyzeIndex,
    GuidanceReceived(String),
}

impl Dashboard {
    fn boot() -> (Self, Task<Message>) {
        (
            Dashboard {
                advisory: Arc::new(AdvisoryClient::from_env()),
                selection: SelectionState::default(),
                selected_region: 0,
                panel: AdvisoryPanel::default(),
                stats: baseline_stats().to_vec(),
                history: Vec::new(),
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::TargetToggled(target) => {
                state.selection.toggle_target(target);
                match state.selection.active_target {
                    Some(target) => state.push_history(format!("Target selected: {target}")),
                    None => state.push_history("Target cleared".into()),
                }
                Task::none()
            }
            Message::IndexToggled(index) => {
                state.selection.toggle_index(index);
                match state.selection.active_index {
                    Some(index) => state.push_history(format!("Spectral view: {index}")),
                    None => state.push_history("Spectral view cleared".into()),
                }
                Task::none()
            }
            Message::RegionSelected(slot) => {
                if slot < REGIONS.len() {
                    state.selected_region = slot;
                    state.push_history(format!("Focus: {}", REGIONS[slot].name));
                }
                Task::none()
            }
            Message::QueryChanged(value) => {
                state.panel.set_query(value);
                Task::none()
            }
            Message::SubmitQuery => match state.panel.begin() {
                Some(prompt) => {
                    state.push_history("Advisory query dispatched".into());
                    state.dispatch(prompt)
                }
                None => Task::none(),
            },
            Message::AnalyzeIndex => {
                let index = match state.selection.active_index {
                    Some(index) => index,
                    None => return Task::none(),
                };
                let prompt = spectral_prompt(index, &REGIONS[state.selected_region]);
                match state.panel.begin_prompt(prompt) {
                    Some(prompt) => {
                        state.push_history(format!("{index} analysis requested"));
                        state.dispatch(prompt)
                    }
                    None => Task::none(),
                }
            }
            Message::GuidanceReceived(guidance) => {
                state.panel.resolve(guidance);
                state.push_history("Guidance received".into());
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        // Mock features are re-rolled on every render by design; the map
        // shimmers until a live feed replaces the generator.
        let features = generate_features(state.selection.active_target, &REGIONS);
        let selected_region = REGIONS[state.selected_region];

        let target_buttons =
            EcosystemTarget::ALL
                .iter()
                .fold(Column::new().spacing(6), |col, &target| {
                    let active = state.selection.active_target == Some(target);
                    col.push(
                        button(text(target.to_string()).size(13))
                            .on_press(Message::TargetToggled(target))
                            .padding(8)
                            .width(Length::Fill)
                            .style(if active {
                                button::primary
                            } else {
                                button::secondary
                            }),
                    )
                });

        let index_buttons = SpectralIndex::ALL
            .iter()
            .fold(Row::new().spacing(6), |r, &index| {
                let active = state.selection.active_index == Some(index);
                r.push(
                    button(text(index.to_string()).size(12))
                        .on_press(Message::IndexToggled(index))
                        .padding(6)
                        .style(if active {
                            button::success
                        } else {
                            button::secondary
                        }),
                )
            });

        let analyze_label = match state.selection.active_index {
            Some(index) => format!("Analyze {index} methodology"),
            None => "Analyze active index".into(),
        };
        let mut analyze = button(text(analyze_label).size(12))
            .padding(6)
            .width(Length::Fill);
        if state.selection.active_index.is_some() && !state.panel.in_flight {
            analyze = analyze.on_press(Message::AnalyzeIndex);
        }

        let query_input = text_input(
            "Ask about spatial topology, projections, or indicators...",
            &state.panel.query,
        )
        .on_input(Message::QueryChanged)
        .padding(8)
        .size(13);

        let submit_label = if state.panel.in_flight {
            "Consulting the archive..."
        } else {
            "Query GIS Architect"
        };
        let mut submit = button(text(submit_label).size(13))
            .padding(8)
            .width(Length::Fill);
        if state.panel.can_submit() {
            submit = submit.on_press(Message::SubmitQuery);
        }

        let guidance_body: Element<'_, Message> = match &state.panel.guidance {
            Some(guidance) => scrollable(text(guidance.as_str()).size(12))
                .height(Length::Fixed(150.0))
                .into(),
            None => text("No guidance requested yet.").size(12).into(),
        };

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(11))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(3), |col, entry| {
                    col.push(text(entry.as_str()).size(11))
                })
        };

        let sidebar = column![
            text("COASTAL GIS ARCHITECT").size(20),
            text("Lead Architect Panel").size(11),
            text("Monitoring Targets").size(14),
            target_buttons,
            text("Spectral Indicators (GEE)").size(14),
            index_buttons,
            analyze,
            text("Architect Query").size(14),
            query_input,
            submit,
            text("Architect Guidance").size(13),
            guidance_body,
            text("Activity log").size(13),
            Container::new(scrollable(history_list).height(Length::Fixed(90.0))).padding(4),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(320.0));

        let target_readout = state
            .selection
            .active_target
            .map(|target| target.to_string())
            .unwrap_or_else(|| "Global Coastline".to_string());
        let index_readout = state
            .selection
            .active_index
            .map(|index| index.to_string())
            .unwrap_or_else(|| "True Color Composite".to_string());

        let header = row![
            column![
                text("Kenyan Coastal Ecosystem Dashboard").size(20),
                text("GEE TIER 1 PIPELINE ACTIVE | SENTINEL-2 L2A").size(10),
            ]
            .spacing(2)
            .width(Length::Fill),
            column![
                text("ACTIVE TARGET").size(10),
                text(target_readout)
                    .size(14)
                    .color(tint((0.40, 0.65, 0.98), 1.0)),
            ]
            .spacing(2)
            .align_x(Alignment::End),
            column![
                text("SPECTRAL VIEW").size(10),
                text(index_readout)
                    .size(14)
                    .color(tint((0.06, 0.73, 0.51), 1.0)),
            ]
            .spacing(2)
            .align_x(Alignment::End),
        ]
        .spacing(24)
        .align_y(Alignment::Center);

        let region_buttons =
            REGIONS
                .iter()
                .enumerate()
                .fold(Row::new().spacing(8), |r, (slot, region)| {
                    let selected = slot == state.selected_region;
                    r.push(
                        button(text(region.name).size(12))
                            .on_press(Message::RegionSelected(slot))
                            .padding(6)
                            .style(if selected {
                                button::primary
                            } else {
                                button::secondary
                            }),
                    )
                });

        let map_canvas = Canvas::new(MapCanvas {
            features,
            active_target: state.selection.active_target,
            active_index: state.selection.active_index,
            selected_region,
        })
        .width(Length::Fill)
        .height(Length::Fixed(330.0));

        let legend = EcosystemTarget::ALL
            .iter()
            .fold(Row::new().spacing(14), |r, &target| {
                r.push(
                    row![
                        text("●").size(12).color(tint(target.accent_rgb(), 1.0)),
                        text(target.to_string()).size(11),
                    ]
                    .spacing(4)
                    .align_y(Alignment::Center),
                )
            });
        let legend = match state.selection.active_index {
            Some(index) => legend.push(
                row![
                    text("■").size(12).color(tint(index.overlay_rgb(), 0.8)),
                    text(format!("Active: {index}")).size(11),
                ]
                .spacing(4)
                .align_y(Alignment::Center),
            ),
            None => legend,
        };

        let cards = state.stats.iter().fold(Column::new().spacing(8), |col, stat| {
            col.push(
                Container::new(
                    column![
                        row![
                            text(stat.target.to_string()).size(11).width(Length::Fill),
                            text(stat.trend.to_string())
                                .size(11)
                                .color(trend_color(stat.trend)),
                        ]
                        .align_y(Alignment::Center),
                        row![
                            text(format!("{:.0}%", stat.health_index * 100.0)).size(18),
                            text(format!("{:.0} km²", stat.coverage_km2)).size(10),
                        ]
                        .spacing(8)
                        .align_y(Alignment::End),
                    ]
                    .spacing(4),
                )
                .padding(8),
            )
        });

        let month_labels = INDICATOR_SERIES
            .iter()
            .fold(Row::new(), |r, (month, _, _)| {
                r.push(text(*month).size(9).width(Length::Fill))
            });
        let trend_panel = column![
            text("HISTORICAL INDICATOR VARIANCE (SENTINEL-2)").size(10),
            Canvas::new(TrendChart)
                .width(Length::Fill)
                .height(Length::Fixed(150.0)),
            month_labels,
        ]
        .spacing(6)
        .width(Length::FillPortion(2));

        let coverage_labels = state.stats.iter().fold(Row::new(), |r, stat| {
            r.push(text(short_target(stat.target)).size(9).width(Length::Fill))
        });
        let coverage_panel = column![
            text("ECOSYSTEM COVERAGE DENSITY").size(10),
            Canvas::new(CoverageChart {
                stats: state.stats.clone(),
            })
            .width(Length::Fill)
            .height(Length::Fixed(150.0)),
            coverage_labels,
        ]
        .spacing(6)
        .width(Length::FillPortion(2));

        let analytics = row![
            column![
                text("HEALTH OVERVIEW").size(10),
                scrollable(cards).height(Length::Fixed(190.0)),
            ]
            .spacing(6)
            .width(Length::FillPortion(1)),
            trend_panel,
            coverage_panel,
        ]
        .spacing(14);

        let footer = row![
            text("EPSG:4326").size(9),
            text("RESOLUTION: 10M/PIXEL").size(9),
            horizontal_space(),
            text("V1.0.4-BETA // DATA SOURCE: COPERNICUS_S2_SR_HARMONIZED").size(9),
        ]
        .spacing(16);

        let content = column![
            header,
            region_buttons,
            map_canvas,
            legend,
            analytics,
            footer,
        ]
        .spacing(12)
        .padding(16)
        .width(Length::Fill);

        let layout = row![sidebar, content].align_y(Alignment::Start);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn dispatch(&self, prompt: String) -> Task<Message> {
        let client = self.advisory.clone();
        Task::perform(
            async move { client.request_guidance(&prompt).await },
            Message::GuidanceReceived,
        )
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Improving => tint((0.20, 0.83, 0.60), 1.0),
        Trend::Stable => tint((0.38, 0.65, 0.98), 1.0),
        Trend::Declining => tint((0.98, 0.44, 0.52), 1.0),
    }
}

fn short_target(target: EcosystemTarget) -> &'static str {
    match target {
        EcosystemTarget::Shoreline => "Shoreline",
        EcosystemTarget::Mangroves => "Mangroves",
        EcosystemTarget::CoralReefs => "Coral",
        EcosystemTarget::Seagrass => "Seagrass",
    }
}
