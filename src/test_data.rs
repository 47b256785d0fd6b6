#[cfg(test)]
pub const DEVTO_POST: &str = "# Rate limiting MCP tools

Agents call tools in bursts. A single planning step can fan out into
dozens of calls, and most APIs will not be happy about it.

## Token buckets

Give every tool its own bucket.
";

#[cfg(test)]
pub const CONVERTED_HEADER: &str = "+++
title = 'Rate limiting MCP tools'
date = 2025-11-03
draft = false
tags = ['agents', 'ai', 'mcp']
+++
";

#[cfg(test)]
pub const HUGO_POST: &str = "+++
title = 'Rate limiting MCP tools'
date = 2025-11-03
draft = false
tags = ['agents', 'ai', 'mcp']
+++

Agents call tools in bursts. A single planning step can fan out into
dozens of calls, and most APIs will not be happy about it.

## Token buckets

Give every tool its own bucket.
";

#[cfg(test)]
pub const HOWTO_POST: &str = "+++
title = 'Airtable and MCP'
date = 2025-03-18T09:00:00Z
draft = false
tags = ['airtable', 'mcp']
description = 'Connect Airtable to an agent in three steps'

[howto]
name = 'Connect Airtable'

[[howto.steps]]
name = 'Create a token'
text = 'Open the developer hub.'

[[howto.steps]]
name = 'Describe the tool'
text = 'Write the tool definition.'

[[faqs]]
question = 'Is it free?'
answer = 'Yes.'
+++

Body of the how-to.
";
