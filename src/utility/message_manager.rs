
use chrono::{DateTime, Utc};

use crate::utility::*;


/// A chat message split into prefix, command and arguments, together with
/// the context a command needs (actor, server, execution time).
#[derive(Clone, Debug)]
pub struct MessageManager {
    guild_id: Option<String>,
    author: PlatformUser,
    prefix: String,
    command: Option<String>,
    words: Vec<String>,
    received_at: DateTime<Utc>,
}

impl MessageManager {

    pub fn new(content: &str,
               prefix: &str,
               guild_id: Option<String>,
               author: PlatformUser,
               received_at: DateTime<Utc>) -> MessageManager {
        let mut manager = MessageManager {
            guild_id,
            author,
            prefix: prefix.to_string(),
            command: None,
            words: Vec::new(),
            received_at,
        };
        manager.parse_message(content);
        manager
    }

    fn parse_message(&mut self, content: &str) {
        // Obtain words
        self.words = content
            .split_whitespace()
            .map(|word| word.to_string())
            .collect();

        // Obtain command
        if let Some(first) = self.words.first() {
            self.command = first.strip_prefix(&self.prefix)
                .filter(|command| !command.is_empty())
                .map(|command| command.to_lowercase());
        }
    }

    fn first_word_index(&self) -> usize {
        if self.is_command() { 1 } else { 0 }
    }

    pub fn is_command(&self) -> bool {
        self.command.is_some()
    }

    pub fn get_command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn get_prefix(&self) -> &str {
        &self.prefix
    }

    /// The n-th word after the command.
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.words.get(self.first_word_index() + index).map(|word| word.as_str())
    }

    /// All words after the command, starting at `starting_from`, joined by single spaces.
    pub fn payload(&self, starting_from: Option<usize>) -> String {
        let first = self.first_word_index() + starting_from.unwrap_or(0);
        match self.words.get(first..) {
            Some(words) => words.join(" ").trim().to_string(),
            None => String::new(),
        }
    }

    pub fn get_guild(&self) -> Option<&str> {
        self.guild_id.as_deref()
    }

    pub fn get_author(&self) -> &PlatformUser {
        &self.author
    }

    pub fn get_timestamp(&self) -> DateTime<Utc> {
        self.received_at
    }

}
