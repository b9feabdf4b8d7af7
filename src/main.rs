#[cfg(target_arch = "wasm32")]
mod demo {
    use kanaquiz::{Inventory, Question, QuizMode, Script, generate_questions};
    use leptos::*;
    use rand::SeedableRng;

    fn demo_questions() -> Result<Vec<Question>, String> {
        let inventory = Inventory::for_script(Script::Hiragana);
        let pool = inventory
            .characters_in_rows(&["あ行".to_string(), "か行".to_string()])
            .map_err(|error| error.to_string())?;

        let mut rng = rand::rngs::StdRng::from_entropy();
        generate_questions(&mut rng, &pool, QuizMode::RomajiToGlyph, 5)
            .map_err(|error| error.to_string())
    }

    #[component]
    fn QuestionPreview(question: Question) -> impl IntoView {
        view! {
            <section class="quiz-card">
                <p class="prompt">{question.prompt.clone()}</p>
                <div class="options-grid">
                    {question
                        .options
                        .iter()
                        .enumerate()
                        .map(|(index, option)| {
                            let status = if index == question.correct_index {
                                "correct"
                            } else {
                                "distractor"
                            };

                            view! {
                                <button class=format!("option {}", status)>
                                    <span class="option-index">{(index + 1).to_string()}</span>
                                    <span class="option-body">{option.glyph.clone()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        }
    }

    #[component]
    fn App() -> impl IntoView {
        let (questions, set_questions) = create_signal::<Option<Vec<Question>>>(None);
        let (error, set_error) = create_signal::<Option<String>>(None);

        let regenerate = move |_| match demo_questions() {
            Ok(generated) => {
                set_error.set(None);
                set_questions.set(Some(generated));
            }
            Err(message) => {
                set_questions.set(None);
                set_error.set(Some(message));
            }
        };

        view! {
            <main class="page">
                <header class="page-header">
                    <div>
                        <p class="eyebrow">"Kana Quiz Sandbox"</p>
                        <h1 class="headline">"Question generator preview"</h1>
                        <p class="lede">
                            "Five romaji-to-character questions over the あ and か rows."
                        </p>
                    </div>
                    <button class="primary" on:click=regenerate>
                        "Generate demo questions"
                    </button>
                </header>

                {move || {
                    if let Some(generated) = questions.get() {
                        generated
                            .into_iter()
                            .map(|question| view! { <QuestionPreview question=question /> })
                            .collect_view()
                    } else if let Some(message) = error.get() {
                        view! {
                            <section class="error-card">
                                <p class="eyebrow">"Generator error"</p>
                                <p class="error-body">{message}</p>
                            </section>
                        }
                        .into_view()
                    } else {
                        view! {
                            <section class="placeholder-card">
                                <p class="eyebrow">"Awaiting prompt"</p>
                                <p class="lede">"Generate a sample question set to preview the core."</p>
                            </section>
                        }
                        .into_view()
                    }
                }}
            </main>
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        mount_to_body(|| view! { <App /> });
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    demo::run();
}
