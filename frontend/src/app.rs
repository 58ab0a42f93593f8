use leptos::{prelude::*, task::spawn_local};

use crate::{
    config::{self, QUESTIONS, Question},
    dispatcher::Dispatcher,
    page::{Content, Field, Output, PageState},
    transport::GlooTransport,
};

type BrowserDispatcher = Dispatcher<PageState, GlooTransport>;

#[component]
pub(crate) fn App() -> impl IntoView {
    let page = PageState::new();
    provide_context(page);
    provide_context(Dispatcher::new(page, GlooTransport::new(config::API_BASE)));

    view! {
        <main class="container p-4 flex flex-col gap-4">
            <Training />
            <Completion />
            <div class="divider divider-secondary"></div>
            <Questions />
            <div class="divider divider-secondary"></div>
            <AddedDocuments />
            <DropDatabase />
        </main>
    }
}

fn use_page() -> PageState {
    use_context::<PageState>().expect("No page state provided")
}

fn use_dispatcher() -> BrowserDispatcher {
    use_context::<BrowserDispatcher>().expect("No dispatcher provided")
}

fn render_content(content: Content) -> impl IntoView {
    match content {
        Content::Text(text) => leptos::either::Either::Left(text),
        Content::Markup(markup) => leptos::either::Either::Right(view! {
            <span inner_html=markup></span>
        }),
    }
}

#[component]
fn Training() -> impl IntoView {
    let page = use_page();
    let dispatcher = use_dispatcher();

    view! {
        <section class="flex flex-col gap-2">
            <input
                type="text"
                id=Field::InputCorpus.id()
                class="input input-xl w-full"
                aria-label="corpus"
                placeholder="Text to train on..."
                bind:value=page.input_corpus
            />
            <button
                type="button"
                id="input_corpus_btn"
                class="btn btn-primary btn-outline"
                on:click=move |_| {
                    let dispatcher = dispatcher.clone();
                    spawn_local(async move { dispatcher.train().await });
                }
            >
                train
            </button>
        </section>
    }
}

#[component]
fn Completion() -> impl IntoView {
    let page = use_page();
    let dispatcher = use_dispatcher();

    view! {
        <section class="flex flex-col gap-2">
            <div class="join w-full">
                <input
                    type="text"
                    id=Field::PredictionPhrase.id()
                    class="input join-item w-full"
                    aria-label="phrase to complete"
                    bind:value=page.pred_phrase
                />
                <button
                    type="button"
                    id="complete_btn"
                    class="btn btn-accent join-item"
                    on:click=move |_| {
                        let dispatcher = dispatcher.clone();
                        spawn_local(async move { dispatcher.complete().await });
                    }
                >
                    complete
                </button>
            </div>
            <p id=Output::Prediction.id() aria-live="polite" class="text-2xl">
                {move || page.prediction.get().map(render_content)}
            </p>
        </section>
    }
}

#[component]
fn Questions() -> impl IntoView {
    view! {
        <section class="flex flex-col gap-2">
            {QUESTIONS
                .iter()
                .map(|question| view! { <QuestionCard question=*question /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn QuestionCard(question: Question) -> impl IntoView {
    let page = use_page();
    let dispatcher = use_dispatcher();

    view! {
        <div class="grid grid-cols-12 items-center gap-2">
            <p id=Field::Question(question).id() class="col-span-7">
                {question.prompt}
            </p>
            <button
                type="button"
                id=question.button_id()
                class="btn btn-soft col-span-2"
                on:click=move |_| {
                    let dispatcher = dispatcher.clone();
                    spawn_local(async move { dispatcher.answer(question).await });
                }
            >
                ask
            </button>
            <p id=Output::Answer(question).id() class="col-span-3 font-bold">
                {move || page.answer(&question).map(render_content)}
            </p>
        </div>
    }
}

#[component]
fn AddedDocuments() -> impl IntoView {
    let page = use_page();
    let dispatcher = use_dispatcher();
    let entries = move || {
        page.documents
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div id="wordsAddedToCorpus">
            <For
                each=entries
                key=|entry| entry.clone()
                children=move |(_, document)| {
                    let dispatcher = dispatcher.clone();
                    let label = document.clone();
                    view! {
                        <p class="flex flex-row gap-4 items-center">
                            {label}
                            <button
                                type="button"
                                class="btn btn-warning btn-outline btn-xs"
                                on:click=move |_| {
                                    let dispatcher = dispatcher.clone();
                                    let document = document.clone();
                                    spawn_local(async move { dispatcher.delete(document).await });
                                }
                            >
                                Delete input
                            </button>
                        </p>
                    }
                }
            />
        </div>
    }
}

#[component]
fn DropDatabase() -> impl IntoView {
    let dispatcher = use_dispatcher();

    view! {
        <button
            type="button"
            id="drop_db"
            class="btn btn-error btn-outline self-start"
            on:click=move |_| {
                let dispatcher = dispatcher.clone();
                spawn_local(async move { dispatcher.drop_db().await });
            }
        >
            drop database
        </button>
    }
}
