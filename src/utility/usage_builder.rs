
use nonempty::NonEmpty;


enum ParameterType {
    Required,
    Optional,
}

struct Parameter {
    name: String,
    param_type: ParameterType,
}

pub struct UsageBuilder {
    pub triggers: NonEmpty<String>,
    parameters: Vec<Parameter>,
    description: Option<String>,
    example: Option<String>,
}

impl UsageBuilder {

    pub fn new(triggers: NonEmpty<String>) -> UsageBuilder {
        UsageBuilder {
            triggers,
            parameters: Vec::new(),
            description: None,
            example: None,
        }
    }

    fn add_parameter(mut self, name: &str, param_type: ParameterType) -> Self {
        self.parameters.push(Parameter {
            name: name.to_string(),
            param_type,
        });
        self
    }

    pub fn add_required(self, name: &str) -> Self {
        self.add_parameter(name, ParameterType::Required)
    }

    pub fn add_optional(self, name: &str) -> Self {
        self.add_parameter(name, ParameterType::Optional)
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.triggers.head
    }

    pub fn build_usage(&self, prefix: &str) -> String {
        let mut usage_string = format!("{}{}", prefix, self.triggers.head);
        for parameter in self.parameters.iter() {
            match parameter.param_type {
                ParameterType::Required => {
                    usage_string.push_str(&format!(" <{}>", parameter.name));
                },
                ParameterType::Optional => {
                    usage_string.push_str(&format!(" [{}]", parameter.name));
                },
            }
        }
        usage_string
    }

    /// Usage line in code formatting, followed by description, example and aliases.
    pub fn build(&self, prefix: &str) -> String {
        let mut lines = vec![format!("`{}`", self.build_usage(prefix))];
        if let Some(description) = &self.description {
            lines.push(description.clone());
        }
        if let Some(example) = &self.example {
            lines.push(format!("Example: `{}{} {}`", prefix, self.triggers.head, example));
        }

        // add alternative command names
        if !self.triggers.tail.is_empty() {
            lines.push(format!("Alternative names: {}", self.triggers.tail.join(", ")));
        }
        lines.join("\n")
    }

}
