use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::GalleryConfig;
use crate::gitlab::RepoHost;
use crate::models::{AppCard, GalleryReport, RepoDocs, Submission};
use crate::search;
use crate::taxonomy::{Topic, TopicClassifier};

pub struct GalleryPipeline {
    host: Arc<dyn RepoHost>,
    classifier: TopicClassifier,
    config: GalleryConfig,
}

impl GalleryPipeline {
    pub fn new(host: impl RepoHost + 'static, config: GalleryConfig) -> Self {
        Self {
            host: Arc::new(host),
            classifier: TopicClassifier::new(),
            config,
        }
    }

    pub async fn build(
        &self,
        submissions: Vec<Submission>,
        query: &str,
        topic_filter: Option<Topic>,
    ) -> GalleryReport {
        // Step 1: apply the search filter
        let filtered = search::filter_submissions(submissions, query);
        tracing::info!("{} submissions after search filter", filtered.len());

        // Step 2: classify each submission into a topic
        let mut entries: Vec<(Submission, Topic)> = filtered
            .into_iter()
            .map(|s| {
                let topic = self
                    .classifier
                    .classify(s.short_description.as_deref().unwrap_or(""), &s.app_name);
                (s, topic)
            })
            .collect();

        // Step 3: optional topic filter
        if let Some(topic) = topic_filter {
            entries.retain(|(_, t)| *t == topic);
            tracing::info!("{} submissions in topic {}", entries.len(), topic);
        }

        // Step 4: probe repository documents
        let cards = if self.config.check_docs {
            self.probe_docs(entries).await
        } else {
            entries
                .into_iter()
                .map(|(submission, topic)| AppCard {
                    submission,
                    topic,
                    docs: None,
                })
                .collect()
        };

        GalleryReport {
            generated_at: Utc::now(),
            total: cards.len(),
            topic_counts: count_topics(&cards),
            cards,
        }
    }

    /// Sequential probes, memoized per repository link for this run.
    async fn probe_docs(&self, entries: Vec<(Submission, Topic)>) -> Vec<AppCard> {
        let pb = ProgressBar::new(entries.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repos")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut memo: HashMap<String, RepoDocs> = HashMap::new();
        let mut cards = Vec::with_capacity(entries.len());

        for (submission, topic) in entries {
            let docs = match submission.repo_link() {
                Some(link) => match memo.get(link).cloned() {
                    Some(docs) => docs,
                    None => {
                        let docs = self.host.repo_docs(link).await;
                        memo.insert(link.to_string(), docs.clone());
                        docs
                    }
                },
                None => RepoDocs::absent(),
            };

            cards.push(AppCard {
                submission,
                topic,
                docs: Some(docs),
            });
            pb.inc(1);
        }

        pb.finish_with_message("Checked repository documents");
        cards
    }
}

fn count_topics(cards: &[AppCard]) -> Vec<(Topic, usize)> {
    Topic::ALL
        .iter()
        .filter_map(|topic| {
            let count = cards.iter().filter(|c| c.topic == *topic).count();
            (count > 0).then_some((*topic, count))
        })
        .collect()
}
