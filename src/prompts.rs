//! Centralized prompt definitions for the two extraction stages.
//!
//! Stage 1 reads the legend of a schematic page and names the connection
//! line styles. Stage 2 is parameterized with stage 1's serialized result
//! and extracts the component connection graph from the stitched image.

/// System prompt for the connection-type extraction stage.
pub const CONNECTION_TYPES_SYSTEM_PROMPT: &str = r#"You are an expert engineer in hydraulic schematic design.
The provided image is the hydraulic schematic design page that includes the legend with the connection types.
Your task is to analyze the legend and describe the connection types based on the colors and shapes of the lines in the hydraulic schematic design page.
Provide the connection type names according to the colors and shapes of the lines.
Your response should be in this JSON format:
{
  "connection_types": [
    {
      "connection_style": "color and shape of the connection line",
      "connection_type": "connection name as listed in the legend inside the hydraulic schematic design page"
    }
  ]
}
Always respond with valid JSON only, no other text."#;

/// User prompt for the connection-type extraction stage.
pub const CONNECTION_TYPES_USER_PROMPT: &str =
    "Analyze this image with the legend information about the connection types and provide the connection name, shapes and colors:";

/// System prompt template for the connection extraction stage.
///
/// Contains a `{connection_types}` placeholder for the serialized result
/// of the first stage; substitute it via [`connection_graph_system_prompt`].
pub const CONNECTION_GRAPH_SYSTEM_TEMPLATE: &str = r#"You are an expert engineer in hydraulic schematic design.
The provided image was created from several pages of a document.
The first part, in vertical orientation, contains the legend page(s) with the component symbols and their names.
The last part of the image, in horizontal orientation, is the hydraulic schematic design page.
Your task is to analyze the hydraulic schematic design and describe the type of connections between the components, taking into account the information in the legend with the following details:
- The components are represented by symbols described in the legend or by standard symbols for hydraulic schematic designs.
- The connection type names are the ones specified in this json: {connection_types}. The colors and shapes of the lines indicate the type of connection.
- The number associated with each component is identified by its symbol as described in the legend pages.

Take your time to read the legend of the hydraulic schematic design and analyze the connections between the components in the hydraulic schematic design page.
Provide the connection type names according to the colors and shapes of the lines and the component numbers based on the information in the connection types provided.
Provide a detailed description of the connections between the components in the hydraulic schematic design page based on the information in the legend.

Your response should be in this JSON format:
{
  "connections": [
    {
      "component_number": component number,
      "component_name": "complete name from the legend",
      "connected_to": [
        {
          "component_number": component number,
          "component_name": "complete name from the legend",
          "connection_style": "color and shape of the line",
          "connection_type": "named as listed in the connection types provided"
        }
      ]
    }
  ]
}
Always respond with valid JSON only, no other text."#;

/// User prompt for the connection extraction stage.
pub const CONNECTION_GRAPH_USER_PROMPT: &str =
    "Analyze this image with the legend information and the hydraulic schematic design:";

/// Build the stage-2 system prompt from the serialized stage-1 legend.
pub fn connection_graph_system_prompt(connection_types_json: &str) -> String {
    CONNECTION_GRAPH_SYSTEM_TEMPLATE.replace("{connection_types}", connection_types_json)
}
