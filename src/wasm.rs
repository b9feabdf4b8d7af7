#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use leptos::leptos_dom::helpers::{IntervalHandle, set_interval_with_handle, set_timeout};
use leptos::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

use crate::character::{Character, Script};
use crate::chart::ChartState;
use crate::quiz::{Question, QuizMode};
use crate::session::{
    Phase, QUESTION_TIME_LIMIT, QuestionCount, QuizSession, Reveal, SessionConfig,
};

fn set_body_theme(theme: &str) {
    if let Some(document) = leptos::window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme);
        }
    }
}

#[wasm_bindgen(inline_js = r#"
export function speakKana(glyph) {
    if (typeof speechSynthesis === 'undefined') {
        return false;
    }

    const utterance = new SpeechSynthesisUtterance(glyph);
    utterance.lang = 'ja-JP';
    utterance.rate = 0.8;
    speechSynthesis.cancel();
    speechSynthesis.speak(utterance);
    return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = speakKana)]
    fn speak_kana(glyph: &str) -> bool;
}

fn speech_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("speechSynthesis"))
        .unwrap_or(false)
}

/// Duration the "playing" highlight stays on a character card.
const PLAYBACK_HIGHLIGHT: Duration = Duration::from_secs(1);

fn performance_message(percentage: u32) -> &'static str {
    if percentage >= 90 {
        "Excellent! You're mastering this!"
    } else if percentage >= 80 {
        "Great job! Keep practicing!"
    } else if percentage >= 60 {
        "Good work! Room for improvement."
    } else {
        "Keep practicing! You'll get there!"
    }
}

fn results_icon(percentage: u32) -> &'static str {
    if percentage >= 80 {
        "🎉"
    } else if percentage >= 60 {
        "👍"
    } else {
        "📚"
    }
}

#[component]
fn CharacterDetail(character: Character, on_play: Callback<String>) -> impl IntoView {
    let glyph = character.glyph.clone();

    view! {
        <aside class="detail-panel">
            <div class="detail-glyph">{character.glyph.clone()}</div>
            <div class="detail-romaji">{character.romaji.clone()}</div>
            {character
                .example
                .clone()
                .map(|example| view! { <div class="detail-example">{example}</div> })}
            <button
                class="btn"
                type="button"
                on:click=move |_| on_play.call(glyph.clone())
                disabled=!speech_available()
            >
                "Play sound"
            </button>
        </aside>
    }
}

#[component]
fn QuestionCard(
    question: Question,
    reveal: Option<Reveal>,
    on_answer: Callback<usize>,
    on_play: Callback<String>,
) -> impl IntoView {
    let correct_glyph = question.correct().glyph.clone();
    let shows_play_button = matches!(
        question.mode,
        QuizMode::SoundToGlyph | QuizMode::GlyphToSound
    );
    let display_glyph = match question.mode {
        QuizMode::GlyphToSound => Some(question.correct().glyph.clone()),
        QuizMode::RomajiToGlyph => Some(question.correct().romaji.clone()),
        _ => None,
    };
    let answered = reveal.is_some();

    view! {
        <div class="question-section">
            <h2 class="question-text">{question.prompt.clone()}</h2>

            {shows_play_button
                .then(|| {
                    let glyph = correct_glyph.clone();
                    view! {
                        <button
                            class="btn play-audio-btn"
                            type="button"
                            on:click=move |_| on_play.call(glyph.clone())
                            disabled=!speech_available()
                        >
                            "Play Sound"
                        </button>
                    }
                })}

            {display_glyph.map(|text| view! { <div class="display-char">{text}</div> })}

            <div class="options-grid">
                {question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| {
                        let label = question.mode.answer_field(option).to_string();
                        let is_correct = question.is_correct(index);
                        let is_selected = reveal
                            .map(|reveal| reveal.selected == Some(index))
                            .unwrap_or(false);

                        let mut classes = vec!["option-btn".to_string()];
                        if answered {
                            if is_correct {
                                classes.push("option-correct".to_string());
                            } else if is_selected {
                                classes.push("option-wrong".to_string());
                            }
                        }

                        let on_answer = on_answer.clone();
                        view! {
                            <button
                                class=classes.join(" ")
                                type="button"
                                aria-pressed=is_selected
                                on:click=move |_| on_answer.call(index)
                                disabled=answered
                            >
                                <span class="option-label">{label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn App() -> impl IntoView {
    let (theme, set_theme) = create_signal(String::from("dark"));
    let chart = create_rw_signal(ChartState::new(Script::Hiragana));
    let session = create_rw_signal(QuizSession::new(SessionConfig::new(Script::Hiragana)));
    let (playing, set_playing) = create_signal::<Option<String>>(None);
    let (setup_error, set_setup_error) = create_signal::<Option<String>>(None);
    let timer = store_value::<Option<IntervalHandle>>(None);

    create_effect(move |_| set_body_theme(&theme.get()));

    let stop_timer = move || {
        timer.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
    };

    let start_timer = move || {
        stop_timer();
        let handle = set_interval_with_handle(
            move || session.update(|session| session.tick()),
            Duration::from_secs(1),
        )
        .ok();
        timer.set_value(handle);
    };

    // The countdown must not outlive the Active phase.
    create_effect(move |_| {
        if session.with(|session| session.phase()) != Phase::Active {
            stop_timer();
        }
    });
    on_cleanup(stop_timer);

    // Fire-and-forget playback request plus the 1 s card highlight.
    let request_audio = Callback::new(move |glyph: String| {
        if speech_available() {
            speak_kana(&glyph);
        }
        set_playing.set(Some(glyph));
        set_timeout(move || set_playing.set(None), PLAYBACK_HIGHLIGHT);
    });

    let toggle_theme = move |_| {
        let next = if theme.get() == "dark" { "light" } else { "dark" };
        set_theme.set(String::from(next));
    };

    let switch_script = Callback::new(move |script: Script| {
        if chart.with(|chart| chart.script()) == script {
            return;
        }
        chart.update(|chart| chart.set_script(script));
        session.update(|session| {
            session.reconfigure();
            session.set_config(SessionConfig::new(script));
        });
        set_setup_error.set(None);
        set_playing.set(None);
    });

    let select_character = {
        let request_audio = request_audio.clone();
        Callback::new(move |glyph: String| {
            chart.update(|chart| {
                chart.select(&glyph);
            });
            request_audio.call(glyph);
        })
    };

    let edit_config = move |edit: &dyn Fn(&mut SessionConfig)| {
        session.update(|session| {
            let mut config = session.config().clone();
            edit(&mut config);
            session.set_config(config);
        });
        set_setup_error.set(None);
    };

    let start_quiz = move |_| {
        let mut rng = StdRng::from_entropy();
        let result = session
            .try_update(|session| session.start(&mut rng))
            .unwrap_or(Ok(()));

        match result {
            Ok(()) => {
                set_setup_error.set(None);
                start_timer();
            }
            Err(error) => set_setup_error.set(Some(error.to_string())),
        }
    };

    let retry_quiz = move |_| {
        let mut rng = StdRng::from_entropy();
        let result = session
            .try_update(|session| session.retry(&mut rng))
            .unwrap_or(Ok(()));

        match result {
            Ok(()) => start_timer(),
            Err(error) => set_setup_error.set(Some(error.to_string())),
        }
    };

    let new_settings = move |_| {
        session.update(|session| session.reconfigure());
        set_setup_error.set(None);
    };

    let exit_practice = move |_| {
        session.update(|session| session.reconfigure());
        chart.update(|chart| chart.exit_practice());
        set_setup_error.set(None);
    };

    let enter_practice = move |_| {
        chart.update(|chart| chart.enter_practice());
    };

    let answer = Callback::new(move |index: usize| {
        session.update(|session| session.answer(index));
    });

    let practicing = move || chart.with(|chart| chart.practicing());
    let phase = move || session.with(|session| session.phase());
    let active_script = move || chart.with(|chart| chart.script());

    view! {
        <div class="app">
            <header class="app-header">
                <div>
                    <div class="app-title">"Japanese Alphabet Charts"</div>
                    <div class="app-subtitle">
                        "Interactive Hiragana and Katakana charts with timed practice quizzes."
                    </div>
                </div>
                <button class="pill" type="button" on:click=toggle_theme>
                    {move || if theme.get() == "dark" { "Switch to light" } else { "Switch to dark" }}
                </button>
            </header>

            <section class="panel">
                <div class="tab-switcher" role="tablist">
                    {[Script::Hiragana, Script::Katakana]
                        .into_iter()
                        .map(|script| {
                            let switch_script = switch_script.clone();
                            view! {
                                <button
                                    class=move || {
                                        if active_script() == script {
                                            "mode-btn active".to_string()
                                        } else {
                                            "mode-btn".to_string()
                                        }
                                    }
                                    type="button"
                                    role="tab"
                                    aria-selected=move || active_script() == script
                                    on:click=move |_| switch_script.call(script)
                                >
                                    {script.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <Show when=move || !practicing()>
                <section class="panel chart-panel">
                    <div class="chart-controls">
                        <div class="learned-count">
                            {move || {
                                chart
                                    .with(|chart| {
                                        format!(
                                            "{} / {} learned",
                                            chart.learned_count(),
                                            chart.inventory().characters().len(),
                                        )
                                    })
                            }}
                        </div>
                        <button
                            class="btn"
                            type="button"
                            on:click=move |_| chart.update(|chart| chart.toggle_romaji())
                        >
                            {move || {
                                if chart.with(|chart| chart.romaji_visible()) {
                                    "Hide Romaji"
                                } else {
                                    "Show Romaji"
                                }
                            }}
                        </button>
                        <button class="btn btn-primary" type="button" on:click=enter_practice>
                            "Practice"
                        </button>
                    </div>

                    <div class="chart-body">
                        {move || {
                            let select_character = select_character.clone();
                            chart
                                .with(|state| {
                                    let romaji_visible = state.romaji_visible();
                                    let hovered = state.hovered().map(str::to_string);
                                    let playing_glyph = playing.get();
                                    state
                                        .inventory()
                                        .rows()
                                        .iter()
                                        .map(|row| {
                                            let cells = row
                                                .characters
                                                .iter()
                                                .map(|character| {
                                                    let glyph = character.glyph.clone();
                                                    let romaji = character.romaji.clone();
                                                    let example = character.example.clone();

                                                    let mut classes = vec!["char-card".to_string()];
                                                    if state.is_learned(&glyph) {
                                                        classes.push("learned".to_string());
                                                    }
                                                    if playing_glyph.as_deref() == Some(glyph.as_str()) {
                                                        classes.push("playing".to_string());
                                                    }

                                                    let tooltip = (hovered.as_deref()
                                                        == Some(glyph.as_str()))
                                                        .then_some(example.clone())
                                                        .flatten();

                                                    let click_glyph = glyph.clone();
                                                    let enter_glyph = glyph.clone();
                                                    let learn_glyph = glyph.clone();
                                                    let select_character = select_character.clone();

                                                    view! {
                                                        <div
                                                            class=classes.join(" ")
                                                            role="button"
                                                            tabindex=0
                                                            on:click=move |_| select_character
                                                                .call(click_glyph.clone())
                                                            on:dblclick=move |_| chart
                                                                .update(|chart| chart.toggle_learned(&learn_glyph))
                                                            on:mouseenter=move |_| chart
                                                                .update(|chart| chart.hover(&enter_glyph))
                                                            on:mouseleave=move |_| chart
                                                                .update(|chart| chart.clear_hover())
                                                        >
                                                            <span class="japanese-character">{glyph.clone()}</span>
                                                            {romaji_visible
                                                                .then(|| {
                                                                    view! { <span class="romaji-box">{romaji.clone()}</span> }
                                                                })}
                                                            {tooltip
                                                                .map(|example| {
                                                                    view! { <div class="example-tooltip">{example}</div> }
                                                                })}
                                                        </div>
                                                    }
                                                })
                                                .collect_view();

                                            view! {
                                                <div class="chart-row">
                                                    <div class="row-label">{row.label.clone()}</div>
                                                    {cells}
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </div>

                    {move || {
                        let request_audio = request_audio.clone();
                        chart
                            .with(|chart| chart.selected().cloned())
                            .map(|character| {
                                view! {
                                    <CharacterDetail character=character on_play=request_audio />
                                }
                            })
                    }}
                </section>
            </Show>

            <Show when=practicing>
                <Show when=move || phase() == Phase::Setup>
                    <section class="panel setup-panel">
                        <div class="panel-title">
                            {move || format!("Practice {}", active_script().label())}
                        </div>

                        <div class="setup-section">
                            <h3 class="section-title">"Quiz Mode"</h3>
                            <div class="radio-group">
                                {move || {
                                    let current = session.with(|session| session.config().mode);
                                    QuizMode::ALL
                                        .into_iter()
                                        .map(|mode| {
                                            view! {
                                                <button
                                                    class=if current == mode {
                                                        "mode-btn active"
                                                    } else {
                                                        "mode-btn"
                                                    }
                                                    type="button"
                                                    on:click=move |_| edit_config(
                                                        &|config| config.mode = mode,
                                                    )
                                                >
                                                    <strong>{mode.title()}</strong>
                                                    <span>{mode.description()}</span>
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>

                        <div class="setup-section">
                            <h3 class="section-title">"Character Rows"</h3>
                            <div class="checkbox-group">
                                {move || {
                                    let selected = session
                                        .with(|session| session.config().selected_rows.clone());
                                    chart
                                        .with(|chart| chart.inventory().row_labels())
                                        .into_iter()
                                        .map(|label| {
                                            let checked = selected.contains(&label);
                                            let toggle_label = label.clone();
                                            view! {
                                                <label class="checkbox-option">
                                                    <input
                                                        type="checkbox"
                                                        checked=checked
                                                        on:change=move |_| {
                                                            let toggle_label = toggle_label.clone();
                                                            edit_config(
                                                                &move |config| {
                                                                    if let Some(index) = config
                                                                        .selected_rows
                                                                        .iter()
                                                                        .position(|row| row == &toggle_label)
                                                                    {
                                                                        config.selected_rows.remove(index);
                                                                    } else {
                                                                        config.selected_rows.push(toggle_label.clone());
                                                                    }
                                                                },
                                                            )
                                                        }
                                                    />
                                                    <span class="row-label">{label.clone()}</span>
                                                </label>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>

                        <div class="setup-section">
                            <h3 class="section-title">"Number of Questions"</h3>
                            <select
                                class="select"
                                on:change=move |ev| {
                                    if let Some(count) = event_target_value(&ev)
                                        .parse::<usize>()
                                        .ok()
                                        .and_then(QuestionCount::from_value)
                                    {
                                        edit_config(&move |config| config.question_count = count);
                                    }
                                }
                            >
                                {move || {
                                    let current = session
                                        .with(|session| session.config().question_count);
                                    QuestionCount::ALL
                                        .into_iter()
                                        .map(|count| {
                                            view! {
                                                <option
                                                    value=count.value().to_string()
                                                    selected=count == current
                                                >
                                                    {format!("{} Questions", count.value())}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>

                        {move || {
                            setup_error
                                .get()
                                .map(|message| view! { <p class="error-body">{message}</p> })
                        }}

                        <div class="setup-actions">
                            <button
                                class="btn btn-primary"
                                type="button"
                                on:click=start_quiz
                                disabled=move || {
                                    session.with(|session| session.config().selected_rows.is_empty())
                                }
                            >
                                "Start Practice"
                            </button>
                            <button class="btn" type="button" on:click=exit_practice>
                                "Back to Charts"
                            </button>
                        </div>
                    </section>
                </Show>

                <Show when=move || phase() == Phase::Active>
                    <section class="panel quiz-panel">
                        <div class="quiz-header">
                            <div class="question-counter">
                                {move || {
                                    session
                                        .with(|session| {
                                            format!(
                                                "Question {} of {}",
                                                session.question_number().unwrap_or(0),
                                                session.total_questions(),
                                            )
                                        })
                                }}
                            </div>
                            <div class="progress-bar">
                                <div
                                    class="progress-fill"
                                    style=move || {
                                        session
                                            .with(|session| {
                                                let total = session.total_questions().max(1);
                                                let position = session.question_number().unwrap_or(0);
                                                format!(
                                                    "width: {:.2}%;",
                                                    position as f64 / total as f64 * 100.0,
                                                )
                                            })
                                    }
                                ></div>
                            </div>
                            <div class="score-display">
                                {move || {
                                    session
                                        .with(|session| {
                                            format!(
                                                "Score: {}/{}",
                                                session.score(),
                                                session.total_questions(),
                                            )
                                        })
                                }}
                            </div>
                            <div class=move || {
                                let urgent = session
                                    .with(|session| session.time_left().unwrap_or(QUESTION_TIME_LIMIT))
                                    <= 5;
                                if urgent { "timer-circle urgent" } else { "timer-circle" }
                            }>
                                {move || {
                                    session
                                        .with(|session| session.time_left().unwrap_or(0))
                                        .to_string()
                                }}
                            </div>
                        </div>

                        {move || {
                            let answer = answer.clone();
                            let request_audio = request_audio.clone();
                            session
                                .with(|session| {
                                    session
                                        .current_question()
                                        .cloned()
                                        .map(|question| (question, session.reveal().copied()))
                                })
                                .map(|(question, reveal)| {
                                    view! {
                                        <QuestionCard
                                            question=question
                                            reveal=reveal
                                            on_answer=answer
                                            on_play=request_audio
                                        />
                                    }
                                })
                        }}
                    </section>
                </Show>

                <Show when=move || phase() == Phase::Results>
                    <section class="panel results-panel">
                        {move || {
                            session
                                .with(|session| session.summary())
                                .map(|summary| {
                                    let percentage = summary.percentage();
                                    view! {
                                        <div class="results-card">
                                            <div class="results-icon">{results_icon(percentage)}</div>
                                            <h2 class="results-title">"Quiz Complete!"</h2>
                                            <div class="final-score">
                                                <span class="score-number">{summary.score}</span>
                                                <span class="score-divider">"/"</span>
                                                <span class="total-questions">{summary.total}</span>
                                            </div>
                                            <div class="percentage">{format!("{}%", percentage)}</div>
                                            <div class="performance-message">
                                                {performance_message(percentage)}
                                            </div>
                                        </div>
                                    }
                                })
                        }}

                        <div class="results-actions">
                            <button class="btn btn-primary" type="button" on:click=retry_quiz>
                                "Practice Again"
                            </button>
                            <button class="btn" type="button" on:click=new_settings>
                                "New Settings"
                            </button>
                            <button class="btn" type="button" on:click=exit_practice>
                                "Back to Charts"
                            </button>
                        </div>
                    </section>
                </Show>
            </Show>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn run() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> });
}
