use component::toggle::Toggle;
use consts::VoiceDescriptor;
use leptos::prelude::*;
use utils::videogen::GenerationRequest;

/// Raw values of the advanced form controls. Numeric fields stay strings
/// here; [`GenerationRequest`]'s builders apply the documented defaults
/// for anything blank or unparsable, so a hidden panel simply yields a
/// request full of defaults.
#[derive(Clone, Copy)]
pub struct AdvancedFields {
    pub ai_model: RwSignal<String>,
    pub voice: RwSignal<String>,
    pub paragraph_number: RwSignal<String>,
    pub automate_youtube_upload: RwSignal<bool>,
    pub use_music: RwSignal<bool>,
    pub zip_url: RwSignal<String>,
    pub threads: RwSignal<String>,
    pub subtitles_position: RwSignal<String>,
    pub custom_prompt: RwSignal<String>,
    pub color: RwSignal<String>,
}

impl AdvancedFields {
    pub fn new() -> Self {
        Self {
            ai_model: RwSignal::new(consts::DEFAULT_AI_MODEL.to_string()),
            voice: RwSignal::new(consts::DEFAULT_VOICE.to_string()),
            paragraph_number: RwSignal::new(String::new()),
            automate_youtube_upload: RwSignal::new(false),
            use_music: RwSignal::new(false),
            zip_url: RwSignal::new(String::new()),
            threads: RwSignal::new(String::new()),
            subtitles_position: RwSignal::new(consts::DEFAULT_SUBTITLES_POSITION.to_string()),
            custom_prompt: RwSignal::new(String::new()),
            color: RwSignal::new(consts::DEFAULT_SUBTITLES_COLOR.to_string()),
        }
    }

    /// Snapshot the controls into a request payload.
    pub fn to_request(&self, video_subject: String) -> GenerationRequest {
        GenerationRequest::new(video_subject)
            .with_ai_model(&self.ai_model.get_untracked())
            .with_voice(&self.voice.get_untracked())
            .with_paragraph_number(&self.paragraph_number.get_untracked())
            .with_youtube_upload(self.automate_youtube_upload.get_untracked())
            .with_music(self.use_music.get_untracked())
            .with_zip_url(&self.zip_url.get_untracked())
            .with_threads(&self.threads.get_untracked())
            .with_subtitles_position(&self.subtitles_position.get_untracked())
            .with_custom_prompt(&self.custom_prompt.get_untracked())
            .with_color(&self.color.get_untracked())
    }
}

impl Default for AdvancedFields {
    fn default() -> Self {
        Self::new()
    }
}

const SELECT_CLASSES: &str = "mt-1 block w-full rounded-md border border-neutral-800 bg-neutral-950 px-3 py-2 text-white outline-none transition focus:border-pink-400";
const INPUT_CLASSES: &str = "mt-1 block w-full rounded-md border border-neutral-800 bg-neutral-950 px-3 py-2 text-white placeholder:text-neutral-600 outline-none transition focus:border-pink-400";

/// Stateless rendering of the advanced controls. The voice list is a
/// collaborator input; the panel renders whatever descriptors it is
/// handed without interpreting them.
#[component]
pub fn AdvancedOptions(
    fields: AdvancedFields,
    voices: &'static [VoiceDescriptor],
) -> impl IntoView {
    view! {
        <div class="bg-neutral-900 rounded-lg shadow-sm p-6 space-y-4">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <label class="block">
                    <span class="text-neutral-300 text-sm">"AI Model"</span>
                    <select
                        name="aiModel"
                        class=SELECT_CLASSES
                        prop:value=move || fields.ai_model.get()
                        on:change=move |ev| fields.ai_model.set(event_target_value(&ev))
                    >
                        {consts::AI_MODELS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="block">
                    <span class="text-neutral-300 text-sm">"Voice"</span>
                    <select
                        name="voice"
                        class=SELECT_CLASSES
                        prop:value=move || fields.voice.get()
                        on:change=move |ev| fields.voice.set(event_target_value(&ev))
                    >
                        {voices
                            .iter()
                            .map(|v| view! { <option value=v.id>{v.label}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="block">
                    <span class="text-neutral-300 text-sm">"Paragraphs"</span>
                    <input
                        type="number"
                        name="paragraphNumber"
                        min="1"
                        placeholder="1"
                        class=INPUT_CLASSES
                        prop:value=move || fields.paragraph_number.get()
                        on:input=move |ev| fields.paragraph_number.set(event_target_value(&ev))
                    />
                </label>

                <label class="block">
                    <span class="text-neutral-300 text-sm">"Threads"</span>
                    <input
                        type="number"
                        name="threads"
                        min="1"
                        placeholder="2"
                        class=INPUT_CLASSES
                        prop:value=move || fields.threads.get()
                        on:input=move |ev| fields.threads.set(event_target_value(&ev))
                    />
                </label>

                <label class="block">
                    <span class="text-neutral-300 text-sm">"Subtitles Position"</span>
                    <select
                        name="subtitlesPosition"
                        class=SELECT_CLASSES
                        prop:value=move || fields.subtitles_position.get()
                        on:change=move |ev| fields.subtitles_position.set(event_target_value(&ev))
                    >
                        {consts::SUBTITLE_POSITIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="block">
                    <span class="text-neutral-300 text-sm">"Subtitles Color"</span>
                    <input
                        type="color"
                        name="subtitlesColor"
                        class="mt-1 block w-full h-10 rounded-md border border-neutral-800 bg-neutral-950 cursor-pointer"
                        prop:value=move || fields.color.get()
                        on:input=move |ev| fields.color.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <label class="block">
                <span class="text-neutral-300 text-sm">"Songs ZIP URL"</span>
                <input
                    type="url"
                    name="zipUrl"
                    placeholder="https://example.com/songs.zip"
                    class=INPUT_CLASSES
                    prop:value=move || fields.zip_url.get()
                    on:input=move |ev| fields.zip_url.set(event_target_value(&ev))
                />
            </label>

            <label class="block">
                <span class="text-neutral-300 text-sm">"Custom Prompt"</span>
                <textarea
                    name="customPrompt"
                    rows=3
                    placeholder="Overrides the built-in script prompt..."
                    class=INPUT_CLASSES
                    prop:value=move || fields.custom_prompt.get()
                    on:input=move |ev| fields.custom_prompt.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="space-y-2">
                <Toggle label="Upload to YouTube" checked=fields.automate_youtube_upload />
                <Toggle label="Use Music" checked=fields.use_music />
            </div>
        </div>
    }
}
